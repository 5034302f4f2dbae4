//! Domain model for project tasks.
//!
//! Tasks carry a board status and a priority. Persistence and board layout
//! concerns stay outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskDraft, TaskPriority, TaskStatus, TaskUpdate};
