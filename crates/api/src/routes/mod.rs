pub mod admin;
pub mod health;
pub mod portfolio;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /portfolio                    public listing (GET)
///
/// /admin/login                  password check (POST)
/// /admin/projects               list, create (admin password)
/// /admin/projects/{id}          delete (admin password)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/portfolio", portfolio::router())
        .nest("/admin", admin::router())
}
