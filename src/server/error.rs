//! HTTP error responses for the generation proxy.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::suggestion::domain::SuggestionError;

/// JSON error body: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

/// Error returned by proxy handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    /// The body is not JSON.
    pub const INVALID_BODY: Self = Self::bad_request("Invalid request body");
    /// The description is missing, not a string, or blank.
    pub const MISSING_DESCRIPTION: Self = Self::bad_request("Description is required");

    const fn bad_request(message: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    const fn internal(message: &'static str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }

    /// Returns the response status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

impl From<SuggestionError> for ApiError {
    fn from(error: SuggestionError) -> Self {
        match error {
            SuggestionError::EmptyDescription => Self::MISSING_DESCRIPTION,
            SuggestionError::NotConfigured => Self::internal("Gemini API key is not configured"),
            SuggestionError::Upstream { status } => Self {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message: "Failed to generate tasks from AI",
            },
            SuggestionError::Transport(_) => Self {
                status: StatusCode::BAD_GATEWAY,
                message: "Failed to reach the AI provider",
            },
            SuggestionError::EmptyGeneration => Self::internal("No content generated from AI"),
            SuggestionError::Malformed(_) => Self::internal("Failed to parse AI response"),
            SuggestionError::InvalidShape => Self::internal("Invalid task format from AI"),
            SuggestionError::Prompt(_) => Self::internal("Internal server error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message.to_owned(),
        };
        (self.status, Json(body)).into_response()
    }
}
