//! Error types for project domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing project values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// Project names are capped to keep sidebars readable.
    #[error("project name exceeds {max} characters")]
    NameTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },
}

/// Error returned while parsing membership roles from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown member role: {0}")]
pub struct ParseMemberRoleError(pub String);
