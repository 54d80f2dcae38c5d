use axum::{Json, extract::State, http::StatusCode, response::{Html, IntoResponse, Response}};
use include_dir::{include_dir, Dir};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::{completion::{CompletionError, CompletionService}, generator::generate_pet_name, models::{AnimalType, GenerationRequest, GenerationResult, RequestError}};

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionService>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidRequest(#[from] RequestError),
    #[error("failed to generate pet names: {0}")]
    Completion(#[from] CompletionError),
    #[error("missing static asset: {0}")]
    MissingAsset(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Completion(_) => StatusCode::BAD_GATEWAY,
            ApiError::MissingAsset(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub async fn index() -> Result<Html<&'static str>, ApiError> {
    STATIC_DIR
        .get_file("index.html")
        .and_then(|f| f.contents_utf8())
        .map(Html)
        .ok_or(ApiError::MissingAsset("index.html"))
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn list_animals() -> Json<Vec<&'static str>> {
    Json(AnimalType::ALL.iter().map(|a| a.label()).collect())
}

pub async fn generate_pet_names(State(state): State<AppState>, Json(body): Json<GenerationRequest>) -> Result<Json<GenerationResult>, ApiError> {
    if let Err(e) = body.validate() {
        tracing::warn!("⚠️ Rejected request: {}", e);
        return Err(e.into());
    }

    tracing::info!("🚀 Generating pet names for animal: {}, color: {}", body.animal_type, body.pet_color);
    let result = generate_pet_name(state.completion.as_ref(), &body).await?;
    tracing::info!("✅ Pet names generated ({} chars)", result.pet_name_suggestions.len());
    Ok(Json(result))
}
