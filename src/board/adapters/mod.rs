//! Adapter implementations of the board gateway port.

mod task_service;
