//! Handlers for the `/admin` resource.
//!
//! Everything except `login` requires [`AdminAccess`].

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use portfolio_core::error::CoreError;
use portfolio_core::project::ProjectSubmission;
use portfolio_core::types::DbId;
use portfolio_db::models::project::Project;
use serde::Deserialize;

use crate::actions::{self, ActionOutcome};
use crate::middleware::admin::{check_password, AdminAccess};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Project form body, accepted as JSON or as an urlencoded HTML form.
#[derive(Debug)]
pub struct SubmissionBody(pub ProjectSubmission);

impl<S> FromRequest<S> for SubmissionBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(submission) = Json::<ProjectSubmission>::from_request(req, state)
                .await
                .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;
            Ok(Self(submission))
        } else {
            let Form(submission) = Form::<ProjectSubmission>::from_request(req, state)
                .await
                .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;
            Ok(Self(submission))
        }
    }
}

/// The `{id}` segment of an admin project route.
#[derive(Debug)]
pub struct ProjectId(pub DbId);

impl<S> FromRequestParts<S> for ProjectId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                rejected(rejection.status(), rejection.body_text())
            })?;
        Ok(Self(id))
    }
}

/// A malformed admin request, answered in the same shape as an action.
fn rejected(status: StatusCode, message: String) -> Response {
    tracing::debug!(%status, error = %message, "Rejected admin request");
    (status, Json(ActionOutcome::failure(message))).into_response()
}

/// POST /api/v1/admin/login
///
/// Lets the admin page check the password before showing the form. The
/// same check guards every other admin route.
pub async fn login(State(state): State<AppState>, Json(input): Json<LoginRequest>) -> Response {
    match check_password(state.config.admin_password.as_deref(), &input.password) {
        Ok(()) => Json(ActionOutcome::ok()).into_response(),
        Err(CoreError::Unauthorized(msg)) => {
            (StatusCode::UNAUTHORIZED, Json(ActionOutcome::failure(msg))).into_response()
        }
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ActionOutcome::failure(err.to_string())),
        )
            .into_response(),
    }
}

/// GET /api/v1/admin/projects
pub async fn list(
    _admin: AdminAccess,
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<Project>>> {
    let projects = actions::list_projects(state.store.as_ref()).await;
    Json(DataResponse { data: projects })
}

/// POST /api/v1/admin/projects
pub async fn create(
    _admin: AdminAccess,
    State(state): State<AppState>,
    SubmissionBody(submission): SubmissionBody,
) -> Response {
    let result =
        actions::create_project(state.store.as_ref(), &state.listing_cache, submission).await;
    let status = match &result {
        Ok(_) => StatusCode::CREATED,
        Err(err) => err.status_code(),
    };
    (status, Json(ActionOutcome::from(&result))).into_response()
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    _admin: AdminAccess,
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
) -> Response {
    let result = actions::delete_project(state.store.as_ref(), &state.listing_cache, id).await;
    let status = match &result {
        Ok(()) => StatusCode::OK,
        Err(err) => err.status_code(),
    };
    (status, Json(ActionOutcome::from(&result))).into_response()
}
