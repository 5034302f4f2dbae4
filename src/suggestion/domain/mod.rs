//! Domain types for AI task suggestions.

mod envelope;
mod error;
mod sanitize;
mod suggestion;

pub use envelope::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
pub use error::SuggestionError;
pub use sanitize::strip_code_fences;
pub use suggestion::{DEFAULT_MAX_SUGGESTIONS, TaskSuggestion, parse_suggestions};
