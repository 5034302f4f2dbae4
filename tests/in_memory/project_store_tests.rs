//! Project store flows over in-memory adapters.

use kanban::project::{
    domain::{DEFAULT_PROJECT_NAME, MemberRole},
    ports::ProjectRepository,
    services::{NO_USER_MESSAGE, ProjectStoreError},
};
use rstest::rstest;

use super::helpers::{ProjectFixture, projects, student};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn first_visit_creates_one_owned_default_project(
    projects: ProjectFixture,
) -> Result<(), eyre::Report> {
    projects.store.refresh().await?;
    let ensured = projects
        .store
        .ensure_default_project()
        .await?
        .ok_or_else(|| eyre::eyre!("signed-in user should get a project"))?;
    let again = projects.store.ensure_default_project().await?;

    eyre::ensure!(ensured.name().as_str() == DEFAULT_PROJECT_NAME, "default name");
    eyre::ensure!(again.as_ref() == Some(&ensured), "second call returns the same project");
    let owners = projects.repository.members_of(ensured.id())?;
    eyre::ensure!(
        owners.iter().map(|member| member.role).collect::<Vec<_>>() == vec![MemberRole::Owner],
        "creator should be the sole owner"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signing_in_as_someone_else_swaps_the_list(
    projects: ProjectFixture,
) -> Result<(), eyre::Report> {
    projects.store.create_project(Some("Sam's thesis")).await?;
    projects.identity.sign_in(student("kai"))?;

    projects.store.session_changed().await?;
    eyre::ensure!(projects.store.projects().is_empty(), "kai has no projects yet");

    projects.store.create_project(Some("Kai's lab")).await?;
    let names: Vec<String> = projects
        .store
        .projects()
        .iter()
        .map(|project| project.name().to_string())
        .collect();
    eyre::ensure!(names == vec!["Kai's lab".to_owned()], "unexpected names {names:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signing_out_blocks_writes(projects: ProjectFixture) -> Result<(), eyre::Report> {
    let created = projects.store.create_project(None).await?;
    projects.identity.sign_out()?;

    let result = projects.store.delete_project(created.id()).await;

    eyre::ensure!(
        matches!(result, Err(ProjectStoreError::NotAuthenticated)),
        "delete should require a user"
    );
    eyre::ensure!(
        projects.store.error().as_deref() == Some(NO_USER_MESSAGE),
        "sign-in prompt should be recorded"
    );
    let still_there = projects
        .repository
        .list_by_owner(created.owner())
        .await?;
    eyre::ensure!(still_there.len() == 1, "project must survive");
    Ok(())
}
