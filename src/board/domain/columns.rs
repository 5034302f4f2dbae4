//! Three-way partition of a project's tasks by status.

use super::{DragEnd, DragError, DragLocation, DragOutcome};
use crate::task::domain::{Task, TaskId, TaskStatus};

/// Ordered board columns.
///
/// Every task sits in exactly one column, the one matching its status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardColumns {
    todo: Vec<Task>,
    in_progress: Vec<Task>,
    done: Vec<Task>,
}

impl BoardColumns {
    /// Groups tasks by status, keeping their relative order.
    #[must_use]
    pub fn partition(tasks: &[Task]) -> Self {
        let mut columns = Self::default();
        for task in tasks {
            columns.column_mut(task.status()).push(task.clone());
        }
        columns
    }

    /// Returns the cards in one column.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }

    /// Iterates the columns in board order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, &[Task])> {
        TaskStatus::ALL
            .into_iter()
            .map(move |status| (status, self.column(status)))
    }

    /// Total number of cards.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    /// Returns `true` when the board holds no cards.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenates the columns in board order.
    #[must_use]
    pub fn flatten(&self) -> Vec<Task> {
        self.iter()
            .flat_map(|(_, tasks)| tasks.iter().cloned())
            .collect()
    }

    /// Finds the location of a card.
    #[must_use]
    pub fn position_of(&self, id: TaskId) -> Option<DragLocation> {
        self.iter().find_map(|(status, tasks)| {
            tasks
                .iter()
                .position(|task| task.id() == id)
                .map(|index| DragLocation::new(status, index))
        })
    }

    /// Returns `true` when the card is on the board.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.position_of(id).is_some()
    }

    /// Applies a drag-end event.
    ///
    /// The destination index is clamped to the column length. Moving across
    /// columns restamps the card with the destination status.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::SourceOutOfRange`] when no card sits at the
    /// source index. The columns are left untouched.
    pub fn apply_drag(&mut self, drag: &DragEnd) -> Result<DragOutcome, DragError> {
        let Some(destination) = drag.destination else {
            return Ok(DragOutcome::Ignored);
        };
        let source = drag.source;
        if source == destination {
            return Ok(DragOutcome::Ignored);
        }

        let source_column = self.column_mut(source.status);
        let len = source_column.len();
        if source.index >= len {
            return Err(DragError::SourceOutOfRange {
                status: source.status,
                index: source.index,
                len,
            });
        }
        let picked = source_column.remove(source.index);

        if source.status == destination.status {
            let task_id = picked.id();
            self.insert_clamped(destination, picked);
            return Ok(DragOutcome::Reordered { task_id });
        }

        let moved = picked.with_status(destination.status);
        self.insert_clamped(destination, moved.clone());
        Ok(DragOutcome::Moved {
            task: moved,
            from: source.status,
        })
    }

    /// Inserts a card at `location`, clamping the index.
    pub(crate) fn insert_clamped(&mut self, location: DragLocation, task: Task) {
        let column = self.column_mut(location.status);
        let index = location.index.min(column.len());
        column.insert(index, task);
    }

    /// Appends a card to the column matching its status.
    pub(crate) fn push(&mut self, task: Task) {
        self.column_mut(task.status()).push(task);
    }

    /// Removes a card, returning it with its former location.
    pub(crate) fn remove(&mut self, id: TaskId) -> Option<(DragLocation, Task)> {
        let location = self.position_of(id)?;
        let column = self.column_mut(location.status);
        (location.index < column.len()).then(|| (location, column.remove(location.index)))
    }

    /// Replaces a card in place, or moves it to the end of its new column
    /// when the status changed. Returns `false` when the card is absent.
    pub(crate) fn replace(&mut self, task: Task) -> bool {
        let Some(location) = self.position_of(task.id()) else {
            return false;
        };
        if location.status == task.status() {
            if let Some(slot) = self.column_mut(location.status).get_mut(location.index) {
                *slot = task;
            }
        } else {
            self.remove(task.id());
            self.push(task);
        }
        true
    }
}
