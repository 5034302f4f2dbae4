//! Per-session project list with single-flight loading.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::single_flight::SingleFlight;
use crate::identity::{
    domain::UserId,
    ports::{IdentityError, IdentityProvider},
};
use crate::project::{
    domain::{Project, ProjectDomainError, ProjectId, ProjectMembership, ProjectName},
    ports::{ProjectRepository, ProjectRepositoryError},
};

/// Message recorded when an operation needs a signed-in user.
pub const NO_USER_MESSAGE: &str = "No authenticated user. Please sign in again.";
/// Fallback message for a failed refresh.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load your projects.";
/// Fallback message for a failed creation.
pub const CREATE_FAILED_MESSAGE: &str = "Unable to create a new project.";
/// Fallback message for a failed default-project creation.
pub const ENSURE_FAILED_MESSAGE: &str = "Unable to create your first project.";
/// Fallback message for a failed rename.
pub const UPDATE_FAILED_MESSAGE: &str = "Unable to update the project.";
/// Fallback message for a failed deletion.
pub const DELETE_FAILED_MESSAGE: &str = "Unable to delete the project.";

/// Errors returned by [`ProjectStore`] operations.
#[derive(Debug, Clone, Error)]
pub enum ProjectStoreError {
    /// No user is signed in.
    #[error("no authenticated user")]
    NotAuthenticated,
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// The identity provider failed.
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

impl ProjectStoreError {
    /// Returns the message shown to the user. Repository and identity
    /// failures carry their own message; `fallback` is used when that
    /// message is blank.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        let message = match self {
            Self::NotAuthenticated => return NO_USER_MESSAGE.to_owned(),
            Self::Domain(err) => return err.to_string(),
            Self::Repository(err) => err.to_string(),
            Self::Identity(err) => err.to_string(),
        };
        if message.trim().is_empty() {
            fallback.to_owned()
        } else {
            message
        }
    }
}

/// Result type for project store operations.
pub type ProjectStoreResult<T> = Result<T, ProjectStoreError>;

#[derive(Debug, Default)]
struct StoreState {
    user: Option<UserId>,
    projects: Vec<Project>,
    error: Option<String>,
    list_loads: usize,
    default_loads: usize,
}

#[derive(Debug, Clone, Copy)]
enum LoadKind {
    List,
    Default,
}

/// Decrements a loading counter when dropped.
struct LoadingGuard<'a> {
    state: &'a Mutex<StoreState>,
    kind: LoadKind,
}

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a Mutex<StoreState>, kind: LoadKind) -> Self {
        let mut guard = lock(state);
        *counter(&mut guard, kind) += 1;
        Self { state, kind }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut guard = lock(self.state);
        let slot = counter(&mut guard, self.kind);
        *slot = slot.saturating_sub(1);
    }
}

fn lock(state: &Mutex<StoreState>) -> MutexGuard<'_, StoreState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn counter(state: &mut StoreState, kind: LoadKind) -> &mut usize {
    match kind {
        LoadKind::List => &mut state.list_loads,
        LoadKind::Default => &mut state.default_loads,
    }
}

/// Project list of the signed-in user.
///
/// Loads for the same user are coalesced, and results are only committed
/// while that user is still signed in. Failures are recorded for display
/// and returned to the caller.
pub struct ProjectStore<R, I, C>
where
    R: ProjectRepository,
    I: IdentityProvider + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    identity: Arc<I>,
    clock: Arc<C>,
    state: Mutex<StoreState>,
    loads: SingleFlight<UserId, Vec<Project>, ProjectStoreError>,
    defaults: SingleFlight<UserId, Project, ProjectStoreError>,
}

impl<R, I, C> ProjectStore<R, I, C>
where
    R: ProjectRepository,
    I: IdentityProvider + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates an empty store.
    #[must_use]
    pub fn new(repository: Arc<R>, identity: Arc<I>, clock: Arc<C>) -> Self {
        Self {
            repository,
            identity,
            clock,
            state: Mutex::new(StoreState::default()),
            loads: SingleFlight::new(),
            defaults: SingleFlight::new(),
        }
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        lock(&self.state)
    }

    /// Returns the cached projects, oldest first.
    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        self.state().projects.clone()
    }

    /// Returns the last recorded error message.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    /// Returns `true` while a refresh or default-project creation runs.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        let state = self.state();
        state.list_loads > 0 || state.default_loads > 0
    }

    /// Returns `true` while a refresh runs.
    #[must_use]
    pub fn is_list_loading(&self) -> bool {
        self.state().list_loads > 0
    }

    /// Resolves the signed-in user, clearing the cache when it changed.
    async fn active_user(&self) -> ProjectStoreResult<Option<UserId>> {
        let current = self.identity.current_user().await?.map(|user| user.id().clone());
        let mut state = self.state();
        if state.user != current {
            debug!(user = ?current, "session changed, clearing projects");
            state.user.clone_from(&current);
            state.projects.clear();
        }
        Ok(current)
    }

    async fn require_user(&self, fallback: &str) -> ProjectStoreResult<UserId> {
        let user = self.active_user().await;
        match user {
            Ok(Some(id)) => Ok(id),
            Ok(None) => Err(self.fail(ProjectStoreError::NotAuthenticated, fallback)),
            Err(err) => Err(self.fail(err, fallback)),
        }
    }

    fn fail(&self, err: ProjectStoreError, fallback: &str) -> ProjectStoreError {
        warn!(error = %err, operation = fallback, "project store operation failed");
        self.state().error = Some(err.user_message(fallback));
        err
    }

    fn clear_error(&self) {
        self.state().error = None;
    }

    fn is_active(&self, user: &UserId) -> bool {
        self.state().user.as_ref() == Some(user)
    }

    /// Fetches the user's projects once per concurrent burst and caches them
    /// while the user is still signed in.
    async fn read_projects(&self, user: &UserId) -> ProjectStoreResult<Vec<Project>> {
        let projects = self
            .loads
            .run(user.clone(), || async {
                self.repository
                    .list_by_owner(user)
                    .await
                    .map_err(ProjectStoreError::from)
            })
            .await?;
        if self.is_active(user) {
            self.state().projects.clone_from(&projects);
        }
        Ok(projects)
    }

    /// Reloads the project list.
    ///
    /// Without a signed-in user the cache is cleared and the call succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError`] when the lookup fails.
    pub async fn refresh(&self) -> ProjectStoreResult<()> {
        let user = match self.active_user().await {
            Ok(Some(user)) => user,
            Ok(None) => return Ok(()),
            Err(err) => return Err(self.fail(err, LOAD_FAILED_MESSAGE)),
        };

        let _loading = LoadingGuard::start(&self.state, LoadKind::List);
        self.clear_error();
        self.read_projects(&user)
            .await
            .map(|_| ())
            .map_err(|err| self.fail(err, LOAD_FAILED_MESSAGE))
    }

    /// Re-reads the session and reloads the projects of whoever is signed
    /// in now.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError`] when the reload fails.
    pub async fn session_changed(&self) -> ProjectStoreResult<()> {
        self.refresh().await
    }

    /// Returns the user's first project, creating "Untitled Project" when
    /// the user has none.
    ///
    /// Returns `Ok(None)` without a signed-in user. Concurrent calls for the
    /// same user create at most one project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError`] when the lookup or creation fails.
    pub async fn ensure_default_project(&self) -> ProjectStoreResult<Option<Project>> {
        let user = match self.active_user().await {
            Ok(Some(user)) => user,
            Ok(None) => return Ok(None),
            Err(err) => return Err(self.fail(err, ENSURE_FAILED_MESSAGE)),
        };
        let cached = self.state().projects.first().cloned();
        if cached.is_some() {
            return Ok(cached);
        }

        self.defaults
            .run(user.clone(), || self.create_default(&user))
            .await
            .map(Some)
    }

    async fn create_default(&self, user: &UserId) -> ProjectStoreResult<Project> {
        let _loading = LoadingGuard::start(&self.state, LoadKind::Default);
        self.clear_error();

        let existing = self
            .read_projects(user)
            .await
            .map_err(|err| self.fail(err, ENSURE_FAILED_MESSAGE))?;
        if let Some(first) = existing.into_iter().next() {
            return Ok(first);
        }

        let project = self
            .create_owned(user, ProjectName::default())
            .await
            .map_err(|err| self.fail(err, ENSURE_FAILED_MESSAGE))?;
        info!(project_id = %project.id(), "created default project");
        if self.is_active(user) {
            self.state().projects = vec![project.clone()];
        }
        Ok(project)
    }

    async fn create_owned(&self, user: &UserId, name: ProjectName) -> ProjectStoreResult<Project> {
        let project = Project::new(user.clone(), name, &*self.clock);
        self.repository.store(&project).await?;
        self.repository
            .add_member(&ProjectMembership::owner_of(&project))
            .await?;
        Ok(project)
    }

    /// Creates a project named `name`, or "Untitled Project" when blank or
    /// absent, and appends it to the list.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::NotAuthenticated`] without a signed-in
    /// user, or the validation or repository failure.
    pub async fn create_project(&self, name: Option<&str>) -> ProjectStoreResult<Project> {
        let user = self.require_user(CREATE_FAILED_MESSAGE).await?;
        self.clear_error();

        let project_name = ProjectName::new(name.unwrap_or_default())
            .map_err(|err| self.fail(err.into(), CREATE_FAILED_MESSAGE))?;
        let created = self
            .create_owned(&user, project_name)
            .await
            .map_err(|err| self.fail(err, CREATE_FAILED_MESSAGE))?;

        if self.is_active(&user) {
            self.state().projects.push(created.clone());
        }
        Ok(created)
    }

    /// Renames a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::NotAuthenticated`] without a signed-in
    /// user, or the validation or repository failure.
    pub async fn update_project(&self, id: ProjectId, name: &str) -> ProjectStoreResult<Project> {
        let user = self.require_user(UPDATE_FAILED_MESSAGE).await?;
        self.clear_error();

        let project_name =
            ProjectName::new(name).map_err(|err| self.fail(err.into(), UPDATE_FAILED_MESSAGE))?;
        let updated = self
            .repository
            .update_name(id, &project_name)
            .await
            .map_err(|err| self.fail(err.into(), UPDATE_FAILED_MESSAGE))?;

        if self.is_active(&user) {
            let mut state = self.state();
            if let Some(slot) = state.projects.iter_mut().find(|project| project.id() == id) {
                *slot = updated.clone();
            }
        }
        Ok(updated)
    }

    /// Deletes a project and drops it from the list.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::NotAuthenticated`] without a signed-in
    /// user, or the repository failure.
    pub async fn delete_project(&self, id: ProjectId) -> ProjectStoreResult<()> {
        let user = self.require_user(DELETE_FAILED_MESSAGE).await?;
        self.clear_error();

        self.repository
            .delete(id)
            .await
            .map_err(|err| self.fail(err.into(), DELETE_FAILED_MESSAGE))?;

        if self.is_active(&user) {
            self.state().projects.retain(|project| project.id() != id);
        }
        Ok(())
    }
}
