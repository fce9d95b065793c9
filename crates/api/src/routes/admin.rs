//! Route definitions for the `/admin` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes except `/login` require the admin password (enforced by the
/// `AdminAccess` extractor).
///
/// ```text
/// POST   /login                   -> login
/// GET    /projects                -> list
/// POST   /projects                -> create
/// DELETE /projects/{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/projects", get(admin::list).post(admin::create))
        .route("/projects/{id}", delete(admin::delete))
}
