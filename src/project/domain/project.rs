//! Project aggregate and membership types.

use super::{ParseMemberRoleError, ProjectDomainError, ProjectId};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name given to projects created without one.
pub const DEFAULT_PROJECT_NAME: &str = "Untitled Project";

/// Validated project display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Longest accepted project name, in characters.
    pub const MAX_LENGTH: usize = 120;

    /// Creates a project name, substituting [`DEFAULT_PROJECT_NAME`] when the
    /// value is blank.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NameTooLong`] when the trimmed name
    /// exceeds [`Self::MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(ProjectDomainError::NameTooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectName {
    fn default() -> Self {
        Self(DEFAULT_PROJECT_NAME.to_owned())
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    owner: UserId,
    name: ProjectName,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project owned by `owner`.
    #[must_use]
    pub fn new(owner: UserId, name: ProjectName, clock: &impl Clock) -> Self {
        Self {
            id: ProjectId::new(),
            owner,
            name,
            created_at: clock.utc(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Renames the project.
    pub fn rename(&mut self, name: ProjectName) {
        self.name = name;
    }
}

/// Role a user holds within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// Created the project and may delete it.
    Owner,
    /// Invited collaborator.
    Member,
}

impl MemberRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Member => "member",
        }
    }
}

impl TryFrom<&str> for MemberRole {
    type Error = ParseMemberRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "member" => Ok(Self::Member),
            _ => Err(ParseMemberRoleError(value.to_owned())),
        }
    }
}

/// Association between a project and a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMembership {
    /// Project the user belongs to.
    pub project_id: ProjectId,
    /// Member user.
    pub user_id: UserId,
    /// Member role.
    pub role: MemberRole,
}

impl ProjectMembership {
    /// Creates an owner membership for a freshly created project.
    #[must_use]
    pub fn owner_of(project: &Project) -> Self {
        Self {
            project_id: project.id(),
            user_id: project.owner().clone(),
            role: MemberRole::Owner,
        }
    }
}
