//! Unit tests for the suggestion pipeline.
