//! Identity collaborator boundary.
//!
//! Authentication itself is delegated to an external provider. This module
//! only models who is signed in and how their profile is displayed:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
