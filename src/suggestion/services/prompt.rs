//! Prompt template for task generation.

use minijinja::{Environment, context};

use crate::suggestion::domain::SuggestionError;

const TASK_PROMPT: &str = r#"You are a task management assistant for students and small teams. Based on the following project description, generate up to {{ max_suggestions }} specific, actionable tasks that would help accomplish this goal. Keep tasks short and easy to understand.

For each task, provide:
- A clear, concise title (max 50 characters)
- A brief description explaining what needs to be done
- A priority level (Low, Medium, or High)

Project description: "{{ description }}"

Return the response as a JSON array of tasks with this exact format:
[
  {
    "title": "Task title here",
    "description": "Task description here",
    "priority": "Low", "Medium", or "High"
  }
]

Only return the JSON array, no additional text or markdown formatting."#;

/// Renders the generation prompt for a project description.
///
/// # Errors
///
/// Returns [`SuggestionError::Prompt`] when rendering fails.
pub fn render_task_prompt(description: &str, max_suggestions: usize) -> Result<String, SuggestionError> {
    let environment = Environment::new();
    environment
        .render_str(TASK_PROMPT, context! { description, max_suggestions })
        .map_err(|error| SuggestionError::Prompt(error.to_string()))
}
