//! Unit tests for task domain and services.
