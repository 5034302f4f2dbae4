//! Port for text generation providers.

use crate::suggestion::domain::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for generation calls.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Text generation provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Sends one `generateContent` request.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the provider is not configured,
    /// unreachable, rejects the call, or answers with an unreadable body.
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> GenerationResult<GenerateContentResponse>;

    /// Returns `true` when a credential is available.
    fn is_configured(&self) -> bool;
}

/// Errors returned by generation providers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// No credential is configured.
    #[error("generation provider is not configured")]
    NotConfigured,

    /// The provider answered with a non-success status.
    #[error("generation provider returned status {status}: {body}")]
    Upstream {
        /// HTTP status.
        status: u16,
        /// Response body, kept for logging.
        body: String,
    },

    /// The request could not be delivered.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("undecodable response: {0}")]
    Decode(String),
}
