//! Kanban board state for the active project.
//!
//! Tasks are partitioned into `todo`, `inProgress`, and `done` columns.
//! Drags update the displayed columns optimistically and are written
//! through a [`ports::BoardGateway`], with rollback on failure.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
