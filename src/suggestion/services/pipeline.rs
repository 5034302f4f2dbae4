//! Suggestion pipeline: prompt, provider call, extraction, validation.

use std::sync::Arc;

use tracing::{info, warn};

use super::prompt::render_task_prompt;
use crate::suggestion::{
    domain::{
        DEFAULT_MAX_SUGGESTIONS, GenerateContentRequest, SuggestionError, TaskSuggestion,
        parse_suggestions,
    },
    ports::{GenerationClient, GenerationError},
};

/// Pipeline settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions returned.
    pub max_suggestions: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl SuggestionConfig {
    /// Sets the suggestion cap.
    #[must_use]
    pub const fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }
}

impl From<GenerationError> for SuggestionError {
    fn from(error: GenerationError) -> Self {
        match error {
            GenerationError::NotConfigured => Self::NotConfigured,
            GenerationError::Upstream { status, .. } => Self::Upstream { status },
            GenerationError::Transport(message) => Self::Transport(message),
            GenerationError::Decode(message) => Self::Malformed(message),
        }
    }
}

/// Turns a project description into validated task suggestions.
pub struct SuggestionPipeline<C>
where
    C: GenerationClient + ?Sized,
{
    client: Arc<C>,
    config: SuggestionConfig,
}

impl<C> SuggestionPipeline<C>
where
    C: GenerationClient + ?Sized,
{
    /// Creates a pipeline with default settings.
    #[must_use]
    pub fn new(client: Arc<C>) -> Self {
        Self::with_config(client, SuggestionConfig::default())
    }

    /// Creates a pipeline with explicit settings.
    #[must_use]
    pub const fn with_config(client: Arc<C>, config: SuggestionConfig) -> Self {
        Self { client, config }
    }

    /// Returns the pipeline settings.
    #[must_use]
    pub const fn config(&self) -> SuggestionConfig {
        self.config
    }

    /// Returns `true` when the provider has a credential.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// Generates suggestions for `description`.
    ///
    /// Blank descriptions fail before any provider call.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionError`] describing the failed step.
    pub async fn suggest(&self, description: &str) -> Result<Vec<TaskSuggestion>, SuggestionError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(SuggestionError::EmptyDescription);
        }

        let prompt = render_task_prompt(trimmed, self.config.max_suggestions)?;
        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self
            .client
            .generate_content(&request)
            .await
            .inspect_err(|err| warn!(error = %err, "generation request failed"))?;

        let text = response
            .first_text()
            .ok_or(SuggestionError::EmptyGeneration)?;
        let suggestions = parse_suggestions(text, self.config.max_suggestions)
            .inspect_err(|err| warn!(error = %err, "generated text rejected"))?;
        info!(count = suggestions.len(), "generated task suggestions");
        Ok(suggestions)
    }
}
