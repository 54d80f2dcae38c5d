//! Pet name generator: builds a prompt from an animal type and color, sends it
//! to a text completion model and serves the suggestions through a small web UI.

pub mod completion;
pub mod config;
pub mod generator;
pub mod models;
pub mod openai;
pub mod prompt;
pub mod routes;

use axum::{Router, routing::{get, post}};
use tower::ServiceBuilder;
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};

pub use completion::{CompletionError, CompletionService};
pub use config::Config;
pub use generator::generate_pet_name;
pub use models::{AnimalType, GenerationRequest, GenerationResult, MAX_PET_COLOR_CHARS};
pub use openai::OpenAiClient;
pub use prompt::build_pet_name_prompt;
pub use routes::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/healthz", get(routes::healthz))
        .route("/api/animals", get(routes::list_animals))
        .route("/api/pet-names", post(routes::generate_pet_names))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any)
                )
        )
        .with_state(state)
}
