//! Kanban: project boards with AI task suggestions.
//!
//! This crate provides the core of a Kanban task manager: a three-column
//! board with optimistic drag-and-drop, per-user projects, and a pipeline
//! that turns a free-text project description into suggested tasks using a
//! text generation provider.
//!
//! # Architecture
//!
//! Kanban follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores, HTTP
//!   clients)
//!
//! # Modules
//!
//! - [`identity`]: Signed-in user and profile display helpers
//! - [`project`]: Projects and the per-session project store
//! - [`task`]: Task records and the task service
//! - [`board`]: Board columns, drag handling, and rollback
//! - [`suggestion`]: AI task suggestion pipeline
//! - [`server`]: HTTP proxy for task generation
//! - [`config`]: Environment configuration
//! - [`telemetry`]: Logging setup

pub mod board;
pub mod config;
pub mod identity;
pub mod project;
pub mod server;
pub mod suggestion;
pub mod task;
pub mod telemetry;
