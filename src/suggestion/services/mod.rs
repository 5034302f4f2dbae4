//! Suggestion orchestration services.

mod pipeline;
mod prompt;

pub use pipeline::{SuggestionConfig, SuggestionPipeline};
pub use prompt::render_task_prompt;
