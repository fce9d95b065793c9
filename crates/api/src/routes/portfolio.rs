//! Route definitions for the public `/portfolio` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Routes mounted at `/portfolio`.
///
/// ```text
/// GET    /                        -> listing
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(portfolio::listing))
}
