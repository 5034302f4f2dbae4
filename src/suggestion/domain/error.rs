//! Errors raised by the suggestion pipeline.

use thiserror::Error;

/// Failures of a suggestion request.
///
/// Items dropped during validation are not errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SuggestionError {
    /// The project description was empty after trimming.
    #[error("project description must not be empty")]
    EmptyDescription,

    /// No provider credential is configured.
    #[error("generation provider is not configured")]
    NotConfigured,

    /// The provider answered with a non-success status.
    #[error("generation provider returned status {status}")]
    Upstream {
        /// HTTP status returned by the provider.
        status: u16,
    },

    /// The provider could not be reached.
    #[error("generation provider unreachable: {0}")]
    Transport(String),

    /// The provider returned no text.
    #[error("generation provider returned no content")]
    EmptyGeneration,

    /// The generated text is not valid JSON.
    #[error("generated text is not valid JSON: {0}")]
    Malformed(String),

    /// The generated JSON is not an array.
    #[error("generated JSON is not an array of tasks")]
    InvalidShape,

    /// The prompt template failed to render.
    #[error("failed to render prompt: {0}")]
    Prompt(String),
}
