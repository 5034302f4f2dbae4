//! Board orchestration services.

mod board;

pub use board::{BoardError, LOAD_FAILED, STATUS_UPDATE_FAILED, TaskBoard};
