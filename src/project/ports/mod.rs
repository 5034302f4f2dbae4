//! Port contracts for project persistence.

pub mod repository;

pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};

#[cfg(test)]
pub use repository::MockProjectRepository;
