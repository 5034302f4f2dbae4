//! Drag-and-drop event types.

use crate::task::domain::{Task, TaskId, TaskStatus};

/// Position of a card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragLocation {
    /// Column the card sits in.
    pub status: TaskStatus,
    /// Zero-based index within the column.
    pub index: usize,
}

impl DragLocation {
    /// Creates a location.
    #[must_use]
    pub const fn new(status: TaskStatus, index: usize) -> Self {
        Self { status, index }
    }
}

/// Drag-end event reported by the board view.
///
/// A missing destination means the card was dropped outside any column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    /// Where the card was picked up.
    pub source: DragLocation,
    /// Where the card was dropped, if anywhere.
    pub destination: Option<DragLocation>,
}

impl DragEnd {
    /// Creates a completed drop from `source` to `destination`.
    #[must_use]
    pub const fn new(source: DragLocation, destination: DragLocation) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// Creates a cancelled drop.
    #[must_use]
    pub const fn cancelled(source: DragLocation) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Result of applying a drag to the board columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Cancelled drop or drop onto the starting position.
    Ignored,
    /// Card moved within its column. Not persisted.
    Reordered {
        /// Moved card.
        task_id: TaskId,
    },
    /// Card moved to another column and restamped with its status.
    Moved {
        /// Moved card carrying the destination status.
        task: Task,
        /// Column the card left.
        from: TaskStatus,
    },
}

/// Errors raised while applying a drag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    /// The source index does not address a card.
    #[error("no card at index {index} of column {status} (length {len})")]
    SourceOutOfRange {
        /// Source column.
        status: TaskStatus,
        /// Requested index.
        index: usize,
        /// Column length.
        len: usize,
    },
}
