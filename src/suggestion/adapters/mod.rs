//! Adapter implementations of the generation port.

pub mod gemini;
pub mod memory;

pub use gemini::{GeminiClient, GeminiConfig};
pub use memory::StaticGenerationClient;
