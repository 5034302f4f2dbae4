//! Unit tests for identity helpers.
