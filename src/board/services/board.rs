//! Optimistic board state manager.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tracing::{debug, warn};

use crate::board::domain::{BoardColumns, DragEnd, DragError, DragLocation, DragOutcome};
use crate::board::ports::{BoardGateway, BoardGatewayError};
use crate::project::domain::ProjectId;
use crate::task::domain::{Task, TaskId};

/// Message recorded when a status update is rolled back.
pub const STATUS_UPDATE_FAILED: &str = "Unable to update the task status.";

/// Message recorded when a project's tasks cannot be loaded.
pub const LOAD_FAILED: &str = "Failed to load tasks.";

/// Errors returned by [`TaskBoard`] operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The drag could not be applied.
    #[error(transparent)]
    Drag(#[from] DragError),

    /// The remote status update failed and the move was rolled back.
    #[error("status update for task {task_id} failed: {source}")]
    StatusUpdate {
        /// Task whose move was rolled back.
        task_id: TaskId,
        /// Gateway failure.
        source: BoardGatewayError,
    },

    /// Loading the project's tasks failed.
    #[error("loading tasks failed: {0}")]
    Load(#[source] BoardGatewayError),
}

#[derive(Debug, Default)]
struct BoardState {
    project_id: Option<ProjectId>,
    /// Authoritative task list, only changed by confirmed writes.
    all_tasks: Vec<Task>,
    columns: BoardColumns,
    /// Bumped by every load and by `close`.
    generation: u64,
    /// Bumped by every change to the displayed columns.
    revision: u64,
    /// Latest drag token per task awaiting confirmation.
    pending: HashMap<TaskId, u64>,
    /// Token of the newest confirmed write per task.
    committed: HashMap<TaskId, u64>,
    next_token: u64,
    error: Option<String>,
    loading: bool,
}

impl BoardState {
    fn show(&mut self, columns: BoardColumns) {
        self.columns = columns;
        self.revision += 1;
    }

    fn commit(&mut self, task: Task) {
        if let Some(slot) = self.all_tasks.iter_mut().find(|stored| stored.id() == task.id()) {
            *slot = task;
        }
    }

    /// Commits a confirmed write unless a newer write of the same task was
    /// already committed.
    fn commit_write(&mut self, token: u64, task: Task) -> bool {
        let newest = self.committed.get(&task.id()).copied().unwrap_or_default();
        if token <= newest {
            return false;
        }
        self.committed.insert(task.id(), token);
        self.commit(task);
        true
    }

    fn reset(&mut self) {
        self.all_tasks.clear();
        self.pending.clear();
        self.committed.clear();
        self.show(BoardColumns::default());
    }
}

/// In-flight cross-column move.
struct PendingMove {
    generation: u64,
    revision: u64,
    token: u64,
    snapshot: BoardColumns,
    original: Task,
    origin: DragLocation,
    moved: Task,
}

/// Board state for the active project.
///
/// Displayed columns change immediately on drag. Status changes are written
/// through the gateway and rolled back when the write fails. Writes that
/// settle after a project switch or [`TaskBoard::close`] are discarded.
pub struct TaskBoard<G>
where
    G: BoardGateway + ?Sized,
{
    gateway: Arc<G>,
    state: Mutex<BoardState>,
}

impl<G> TaskBoard<G>
where
    G: BoardGateway + ?Sized,
{
    /// Creates an empty board.
    #[must_use]
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            state: Mutex::new(BoardState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the active project.
    #[must_use]
    pub fn project_id(&self) -> Option<ProjectId> {
        self.state().project_id
    }

    /// Returns a copy of the displayed columns.
    #[must_use]
    pub fn columns(&self) -> BoardColumns {
        self.state().columns.clone()
    }

    /// Returns the authoritative task list.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.state().all_tasks.clone()
    }

    /// Returns the last recorded error message.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    /// Clears the recorded error message.
    pub fn clear_error(&self) {
        self.state().error = None;
    }

    /// Returns `true` while a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// Switches to a project and fetches its tasks.
    ///
    /// The previous project's cards are cleared before the fetch starts, so
    /// nothing is draggable while loading, and the board stays empty when
    /// the fetch fails. A load superseded by a newer load or by
    /// [`Self::close`] leaves the state alone.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Load`] when the fetch fails.
    pub async fn load_project(&self, project_id: ProjectId) -> Result<(), BoardError> {
        let generation = {
            let mut state = self.state();
            state.generation += 1;
            state.project_id = Some(project_id);
            state.reset();
            state.error = None;
            state.loading = true;
            state.generation
        };

        let result = self.gateway.list_tasks(project_id).await;

        let mut state = self.state();
        if state.generation != generation {
            debug!(%project_id, "discarding superseded task load");
            return result.map(|_| ()).map_err(BoardError::Load);
        }
        state.loading = false;
        match result {
            Ok(tasks) => {
                let columns = BoardColumns::partition(&tasks);
                state.all_tasks = tasks;
                state.show(columns);
                Ok(())
            }
            Err(err) => {
                warn!(%project_id, error = %err, "failed to load tasks");
                state.reset();
                state.error = Some(LOAD_FAILED.to_owned());
                Err(BoardError::Load(err))
            }
        }
    }

    /// Replaces the whole task list.
    pub fn replace_tasks(&self, tasks: Vec<Task>) {
        let mut state = self.state();
        let columns = BoardColumns::partition(&tasks);
        state.all_tasks = tasks;
        state.pending.clear();
        state.committed.clear();
        state.show(columns);
    }

    /// Appends tasks that are not on the board yet. Returns how many were
    /// added.
    #[must_use]
    pub fn insert_tasks(&self, tasks: impl IntoIterator<Item = Task>) -> usize {
        let mut state = self.state();
        let mut columns = state.columns.clone();
        let mut added = 0;
        for task in tasks {
            if state.all_tasks.iter().any(|stored| stored.id() == task.id()) {
                continue;
            }
            columns.push(task.clone());
            state.all_tasks.push(task);
            added += 1;
        }
        if added > 0 {
            state.show(columns);
        }
        added
    }

    /// Replaces a task after an inline edit. Returns `false` when the task is
    /// not on the board.
    #[must_use]
    pub fn replace_task(&self, task: Task) -> bool {
        let mut state = self.state();
        let mut columns = state.columns.clone();
        if !columns.replace(task.clone()) {
            return false;
        }
        state.commit(task);
        state.show(columns);
        true
    }

    /// Removes a task after deletion. Returns `false` when the task is not
    /// on the board.
    #[must_use]
    pub fn remove_task(&self, id: TaskId) -> bool {
        let mut state = self.state();
        let mut columns = state.columns.clone();
        if columns.remove(id).is_none() {
            return false;
        }
        state.all_tasks.retain(|task| task.id() != id);
        state.pending.remove(&id);
        state.committed.remove(&id);
        state.show(columns);
        true
    }

    /// Tears the board down. In-flight calls settle without effect.
    pub fn close(&self) {
        let mut state = self.state();
        state.generation += 1;
        state.pending.clear();
        state.committed.clear();
        state.loading = false;
    }

    /// Applies a drag-end event.
    ///
    /// Cross-column moves show immediately and are then written through the
    /// gateway. Every confirmed write of the current project is committed
    /// to the task list unless a newer write of the same task was committed
    /// first. A failed write restores the pre-drag columns, or only undoes
    /// this move when other changes happened meanwhile.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Drag`] for an out-of-range source index and
    /// [`BoardError::StatusUpdate`] when the write fails.
    pub async fn handle_drag_end(&self, drag: DragEnd) -> Result<DragOutcome, BoardError> {
        let pending = {
            let mut state = self.state();
            let snapshot = state.columns.clone();
            let mut columns = snapshot.clone();
            let outcome = columns.apply_drag(&drag)?;
            let DragOutcome::Moved { task, from } = &outcome else {
                if outcome != DragOutcome::Ignored {
                    state.show(columns);
                }
                return Ok(outcome);
            };
            let original = task.with_status(*from);
            let moved = task.clone();
            state.show(columns);
            state.next_token += 1;
            let token = state.next_token;
            state.pending.insert(moved.id(), token);
            PendingMove {
                generation: state.generation,
                revision: state.revision,
                token,
                snapshot,
                original,
                origin: drag.source,
                moved,
            }
        };

        let task_id = pending.moved.id();
        let result = self
            .gateway
            .update_status(task_id, pending.moved.status())
            .await;

        let mut state = self.state();
        let current = state.generation == pending.generation;
        let latest = state.pending.get(&task_id) == Some(&pending.token);
        if current && latest {
            state.pending.remove(&task_id);
        }

        match result {
            Ok(stored) => {
                if !current || !state.commit_write(pending.token, stored) {
                    debug!(%task_id, "skipping commit of superseded status update");
                }
                Ok(DragOutcome::Moved {
                    task: pending.moved,
                    from: pending.original.status(),
                })
            }
            Err(err) => {
                warn!(%task_id, error = %err, "status update failed, rolling back");
                if current {
                    rollback(&mut state, pending, latest);
                }
                Err(BoardError::StatusUpdate {
                    task_id,
                    source: err,
                })
            }
        }
    }
}

fn rollback(state: &mut BoardState, pending: PendingMove, latest: bool) {
    state.error = Some(STATUS_UPDATE_FAILED.to_owned());
    if state.revision == pending.revision {
        state.show(pending.snapshot);
        return;
    }
    if !latest {
        return;
    }
    let mut columns = state.columns.clone();
    if columns.remove(pending.original.id()).is_none() {
        return;
    }
    columns.insert_clamped(pending.origin, pending.original);
    state.show(columns);
}
