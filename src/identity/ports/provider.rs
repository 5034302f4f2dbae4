//! Identity provider port.

use crate::identity::domain::User;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for identity lookups.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Session lookup contract for the external identity provider.
///
/// Sign-in, sign-up, and OAuth redirects stay with the provider; the core
/// only needs to know who is signed in right now.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the currently signed-in user, or `None` without a session.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] when the provider cannot be reached.
    async fn current_user(&self) -> IdentityResult<Option<User>>;
}

/// Errors returned by identity provider implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// The provider could not resolve the session.
    #[error("identity provider error: {0}")]
    Provider(String),
}
