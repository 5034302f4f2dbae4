//! Suggested tasks and validation of generated JSON.

use super::{SuggestionError, strip_code_fences};
use crate::task::domain::TaskPriority;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Default number of suggestions kept per request.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// A task proposed by the model, not yet on any board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSuggestion {
    /// Trimmed, non-empty title.
    pub title: String,
    /// Trimmed, non-empty description.
    pub description: String,
    /// Priority.
    pub priority: TaskPriority,
}

impl TaskSuggestion {
    /// Creates a suggestion.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
        }
    }

    /// Reads a suggestion from one element of the generated array.
    ///
    /// Returns `None` unless `title` and `description` are non-blank strings
    /// and `priority` is exactly `Low`, `Medium`, or `High`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let title = non_blank(value.get("title"))?;
        let description = non_blank(value.get("description"))?;
        let priority = value
            .get("priority")
            .and_then(Value::as_str)
            .and_then(|raw| TaskPriority::try_from(raw).ok())?;
        Some(Self::new(title, description, priority))
    }
}

fn non_blank(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// Turns generated text into at most `max` validated suggestions.
///
/// Code fences are stripped first. Invalid elements are dropped and the
/// survivors keep their order.
///
/// # Errors
///
/// Returns [`SuggestionError::Malformed`] when the text is not JSON and
/// [`SuggestionError::InvalidShape`] when it is not an array.
pub fn parse_suggestions(text: &str, max: usize) -> Result<Vec<TaskSuggestion>, SuggestionError> {
    let cleaned = strip_code_fences(text);
    let parsed: Value = serde_json::from_str(cleaned)
        .map_err(|err| SuggestionError::Malformed(err.to_string()))?;
    let Value::Array(items) = parsed else {
        return Err(SuggestionError::InvalidShape);
    };

    let total = items.len();
    let accepted: Vec<TaskSuggestion> = items
        .iter()
        .filter_map(|item| {
            let suggestion = TaskSuggestion::from_value(item);
            if suggestion.is_none() {
                debug!(%item, "dropping invalid suggestion");
            }
            suggestion
        })
        .take(max)
        .collect();
    debug!(total, kept = accepted.len(), "validated generated suggestions");
    Ok(accepted)
}
