//! Board view state: column partition and drag events.
//!
//! Column order reflects fetch order unless cards were reordered by hand.
//! In-column reordering is view-only.

mod columns;
mod drag;

pub use columns::BoardColumns;
pub use drag::{DragEnd, DragError, DragLocation, DragOutcome};
