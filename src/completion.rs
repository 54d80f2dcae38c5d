use async_trait::async_trait;
use thiserror::Error;

/// Temperature sent with every completion. 1.0 keeps the suggestions varied.
pub const CREATIVE_TEMPERATURE: f32 = 1.0;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")] Http(String),
    /// `body` is kept for logs and callers; it stays out of the message.
    #[error("API error: status={status}")] Api { status: u16, body: String },
    #[error("OPENAI_API_KEY is not set")] MissingApiKey,
    #[error("parse error: {0}")] Parse(String),
    #[error("no completion text in response")] EmptyResponse,
}

/// A remote text-completion service: prompt in, generated text out.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
