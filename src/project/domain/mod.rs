//! Domain model for projects and their memberships.

mod error;
mod ids;
mod project;

pub use error::{ParseMemberRoleError, ProjectDomainError};
pub use ids::ProjectId;
pub use project::{
    DEFAULT_PROJECT_NAME, MemberRole, Project, ProjectMembership, ProjectName,
};
