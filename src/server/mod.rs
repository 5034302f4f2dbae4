//! HTTP proxy in front of the generation provider.
//!
//! Routes:
//!
//! - `POST /api/ai/generate-tasks`: `{ "description": "..." }` to
//!   `{ "tasks": [...] }`
//! - `GET /health`: liveness and configuration status

mod error;
mod handlers;


use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::suggestion::{ports::GenerationClient, services::SuggestionPipeline};

pub use error::{ApiError, ErrorBody};
pub use handlers::{GenerateTasksResponse, HealthResponse, generate_tasks, health};

/// Shared handler state.
pub struct ApiState {
    pipeline: SuggestionPipeline<dyn GenerationClient>,
}

impl ApiState {
    /// Creates handler state around a pipeline.
    #[must_use]
    pub const fn new(pipeline: SuggestionPipeline<dyn GenerationClient>) -> Self {
        Self { pipeline }
    }
}

/// Builds the application router.
#[must_use]
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/ai/generate-tasks", post(generate_tasks))
        .with_state(state)
}
