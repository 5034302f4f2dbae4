//! Step definitions for board drag scenarios.

pub mod world;
mod given;
mod when;
mod then;
