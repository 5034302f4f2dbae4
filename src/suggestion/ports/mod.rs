//! Port contracts for suggestion generation.

pub mod generator;

pub use generator::{GenerationClient, GenerationError, GenerationResult};

#[cfg(test)]
pub use generator::MockGenerationClient;
