use std::sync::Arc;

use portfolio_db::store::ProjectStore;

use crate::config::ServerConfig;
use crate::listing_cache::ListingCache;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Project persistence. Postgres in production, in-memory in tests.
    pub store: Arc<dyn ProjectStore>,
    /// Server configuration (admin password, timeouts).
    pub config: Arc<ServerConfig>,
    /// Cached public listing, invalidated by admin mutations.
    pub listing_cache: Arc<ListingCache>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            listing_cache: Arc::new(ListingCache::new()),
        }
    }
}
