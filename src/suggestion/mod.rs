//! AI task suggestions.
//!
//! A free-text project description is turned into a prompt, sent to a
//! generation provider, and the returned text is parsed into validated
//! [`domain::TaskSuggestion`] values. Accepted suggestions are imported as
//! tasks by [`crate::task::services::TaskService::import_suggestions`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
