//! Handlers for the public `/portfolio` resource.

use axum::extract::State;
use axum::Json;
use portfolio_core::listing::Listing;

use crate::actions;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/portfolio
///
/// Persisted projects followed by the static catalog, plus the category
/// filter set. Always succeeds; without a database only the catalog is
/// listed.
pub async fn listing(State(state): State<AppState>) -> Json<DataResponse<Listing>> {
    let listing = actions::public_listing(state.store.as_ref(), &state.listing_cache).await;
    Json(DataResponse {
        data: Listing::clone(&listing),
    })
}
