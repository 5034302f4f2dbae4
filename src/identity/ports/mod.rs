//! Port contracts for identity lookup.

pub mod provider;

pub use provider::{IdentityError, IdentityProvider, IdentityResult};

#[cfg(test)]
pub use provider::MockIdentityProvider;
