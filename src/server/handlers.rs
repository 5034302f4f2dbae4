//! Request handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::ApiState;
use super::error::ApiError;
use crate::suggestion::domain::TaskSuggestion;

/// Successful generation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateTasksResponse {
    /// Validated suggestions.
    pub tasks: Vec<TaskSuggestion>,
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Whether a provider credential is configured.
    pub ai_configured: bool,
}

/// `GET /health`
pub async fn health(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        ai_configured: state.pipeline.is_configured(),
    })
}

/// `POST /api/ai/generate-tasks`
///
/// # Errors
///
/// Returns [`ApiError`] with the status and message for the failed step.
pub async fn generate_tasks(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateTasksResponse>, ApiError> {
    let Json(payload) = body.map_err(|rejection| {
        debug!(error = %rejection, "rejected generation request body");
        ApiError::INVALID_BODY
    })?;
    let description = payload
        .get("description")
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .ok_or(ApiError::MISSING_DESCRIPTION)?;

    let tasks = state.pipeline.suggest(description).await.map_err(|err| {
        warn!(error = %err, "task generation failed");
        ApiError::from(err)
    })?;
    Ok(Json(GenerateTasksResponse { tasks }))
}
