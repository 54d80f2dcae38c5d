use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, error};

use crate::completion::{CompletionError, CompletionService, CREATIVE_TEMPERATURE};
use crate::config::Config;

const MAX_TOKENS: u32 = 256;

pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: CREATIVE_TEMPERATURE,
        }
    }

    async fn perform_api_call(&self, api_key: &str, prompt: &str) -> Result<String, CompletionError> {
        let url = format!("{}/completions", self.base_url);
        info!("🔗 Making request to: {} (model {})", url, self.model);

        let request_body = CompletionRequest {
            model: &self.model,
            prompt,
            temperature: self.temperature,
            max_tokens: MAX_TOKENS,
        };

        let response = self.client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| CompletionError::Http(e.to_string()))?;

        let status = response.status();
        info!("📥 Response status: {}", status);

        let response_text = response.text().await
            .map_err(|e| CompletionError::Http(e.to_string()))?;

        if !status.is_success() {
            error!("❌ API Error response: {}", response_text);
            return Err(CompletionError::Api { status: status.as_u16(), body: response_text });
        }

        parse_completion_text(&response_text)
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("❌ No OPENAI_API_KEY configured, cannot call the completions API");
            return Err(CompletionError::MissingApiKey);
        };

        info!("Generating text with OpenAI completions API...");
        let result = self.perform_api_call(api_key, prompt).await;
        match &result {
            Ok(text) => info!("✅ Completion received ({} chars)", text.len()),
            Err(e) => error!("❌ Completion failed: {}", e),
        }
        result
    }
}

// --- Wire types ---

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    text: String,
}

/// Text of the first choice, untouched.
fn parse_completion_text(body: &str) -> Result<String, CompletionError> {
    let parsed: CompletionResponse = serde_json::from_str(body).map_err(|e| {
        error!("❌ Unparseable completion response: {}", body);
        CompletionError::Parse(e.to_string())
    })?;
    parsed.choices
        .into_iter()
        .next()
        .map(|c| c.text)
        .ok_or(CompletionError::EmptyResponse)
}
