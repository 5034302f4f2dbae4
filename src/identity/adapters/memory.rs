//! In-memory identity provider for tests and embedded use.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::User,
    ports::{IdentityError, IdentityProvider, IdentityResult},
};

/// Thread-safe identity provider holding a single session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityProvider {
    session: Arc<RwLock<Option<User>>>,
}

impl InMemoryIdentityProvider {
    /// Creates a provider without an active session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider with `user` already signed in.
    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self {
            session: Arc::new(RwLock::new(Some(user))),
        }
    }

    /// Replaces the active session with `user`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Provider`] when the session lock is poisoned.
    pub fn sign_in(&self, user: User) -> IdentityResult<()> {
        let mut session = self
            .session
            .write()
            .map_err(|err| IdentityError::Provider(err.to_string()))?;
        *session = Some(user);
        Ok(())
    }

    /// Ends the active session.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Provider`] when the session lock is poisoned.
    pub fn sign_out(&self) -> IdentityResult<()> {
        let mut session = self
            .session
            .write()
            .map_err(|err| IdentityError::Provider(err.to_string()))?;
        *session = None;
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn current_user(&self) -> IdentityResult<Option<User>> {
        let session = self
            .session
            .read()
            .map_err(|err| IdentityError::Provider(err.to_string()))?;
        Ok(session.clone())
    }
}
