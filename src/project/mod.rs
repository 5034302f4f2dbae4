//! Projects owned by the signed-in user.
//!
//! A project groups tasks onto one board. New users get an "Untitled
//! Project" on first load.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The [`services::ProjectStore`] session cache in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
