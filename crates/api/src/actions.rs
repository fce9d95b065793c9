//! Project operations behind the admin page and the public listing.
//!
//! Every operation is recovered at this boundary: datastore failures are
//! logged here and reported with a generic message, never with the
//! underlying error text.

use std::sync::Arc;

use axum::http::StatusCode;
use portfolio_core::catalog::static_projects;
use portfolio_core::error::CoreError;
use portfolio_core::listing::{compose_listing, Listing, PortfolioProject};
use portfolio_core::project::ProjectSubmission;
use portfolio_core::types::DbId;
use portfolio_db::client::ClientError;
use portfolio_db::models::project::Project;
use portfolio_db::store::ProjectStore;
use serde::Serialize;

use crate::listing_cache::ListingCache;

/// Failure of an admin mutation. The `Display` text is the user-facing
/// message.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("DATABASE_URL is not configured.")]
    Configuration,

    #[error("{0}")]
    Validation(String),

    #[error("Failed to save to the database.")]
    SaveFailed,

    #[error("Failed to delete the project.")]
    DeleteFailed,
}

impl ActionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ActionError::Configuration => StatusCode::SERVICE_UNAVAILABLE,
            ActionError::Validation(_) => StatusCode::BAD_REQUEST,
            ActionError::SaveFailed | ActionError::DeleteFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// `{ "success": bool, "error"?: string }` body returned by admin mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

impl<T> From<&Result<T, ActionError>> for ActionOutcome {
    fn from(result: &Result<T, ActionError>) -> Self {
        match result {
            Ok(_) => ActionOutcome::ok(),
            Err(err) => ActionOutcome::failure(err.to_string()),
        }
    }
}

/// All persisted projects, newest first.
///
/// Best effort: an unconfigured store or a datastore failure yields an empty
/// list so the public page always renders.
pub async fn list_projects(store: &dyn ProjectStore) -> Vec<Project> {
    fetch_projects(store).await.unwrap_or_default()
}

/// Like [`list_projects`], but `None` when the store could not be read.
async fn fetch_projects(store: &dyn ProjectStore) -> Option<Vec<Project>> {
    if !store.is_configured() {
        tracing::debug!("Database not configured, listing no persisted projects");
        return None;
    }
    match store.list().await {
        Ok(projects) => Some(projects),
        Err(ClientError::NotConfigured) => None,
        Err(err) => {
            tracing::error!(error = %err, "Failed to list projects");
            None
        }
    }
}

/// Validate an admin form submission and insert it.
pub async fn create_project(
    store: &dyn ProjectStore,
    cache: &ListingCache,
    submission: ProjectSubmission,
) -> Result<Project, ActionError> {
    if !store.is_configured() {
        return Err(ActionError::Configuration);
    }

    let input = submission.into_new_project().map_err(|err| match err {
        CoreError::Validation(msg) => ActionError::Validation(msg),
        other => ActionError::Validation(other.to_string()),
    })?;

    let project = store.create(&input).await.map_err(|err| match err {
        ClientError::NotConfigured => ActionError::Configuration,
        err => {
            tracing::error!(error = %err, title = %input.title, "Failed to create project");
            ActionError::SaveFailed
        }
    })?;

    tracing::info!(project_id = project.id, title = %project.title, "Project created");
    cache.invalidate().await;
    Ok(project)
}

/// Delete a project unconditionally. A missing id is reported as a failure.
pub async fn delete_project(
    store: &dyn ProjectStore,
    cache: &ListingCache,
    id: DbId,
) -> Result<(), ActionError> {
    if !store.is_configured() {
        return Err(ActionError::Configuration);
    }

    store.delete(id).await.map_err(|err| match err {
        ClientError::NotConfigured => ActionError::Configuration,
        err => {
            tracing::error!(error = %err, project_id = id, "Failed to delete project");
            ActionError::DeleteFailed
        }
    })?;

    tracing::info!(project_id = id, "Project deleted");
    cache.invalidate().await;
    Ok(())
}

/// The public listing, served from cache when possible.
///
/// A listing built without the datastore falls back to the catalog and is
/// not cached.
pub async fn public_listing(store: &dyn ProjectStore, cache: &ListingCache) -> Arc<Listing> {
    cache
        .get_or_build(move || async move {
            let persisted = fetch_projects(store).await;
            let complete = persisted.is_some();
            let projects = persisted
                .unwrap_or_default()
                .into_iter()
                .map(PortfolioProject::from)
                .collect();
            (compose_listing(projects, static_projects()), complete)
        })
        .await
}
