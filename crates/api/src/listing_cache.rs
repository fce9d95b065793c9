//! In-process cache of the composed public listing.
//!
//! Admin mutations call [`ListingCache::invalidate`]; the next public read
//! rebuilds the listing from the store.

use std::future::Future;
use std::sync::Arc;

use portfolio_core::listing::Listing;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct ListingCache {
    inner: RwLock<Option<Arc<Listing>>>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached listing, building it with `build` on a miss.
    ///
    /// `build` also reports whether its listing is complete. An incomplete
    /// one (the datastore was unreachable) is returned but not stored, so
    /// the next read tries again.
    ///
    /// The write lock is held while building so an invalidation cannot be
    /// overwritten by a listing composed before it.
    pub async fn get_or_build<F, Fut>(&self, build: F) -> Arc<Listing>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = (Listing, bool)>,
    {
        if let Some(listing) = self.inner.read().await.as_ref() {
            return Arc::clone(listing);
        }

        let mut guard = self.inner.write().await;
        if let Some(listing) = guard.as_ref() {
            return Arc::clone(listing);
        }
        let (listing, complete) = build().await;
        let listing = Arc::new(listing);
        if complete {
            *guard = Some(Arc::clone(&listing));
        }
        listing
    }

    pub async fn invalidate(&self) {
        *self.inner.write().await = None;
    }

    pub async fn is_cached(&self) -> bool {
        self.inner.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use portfolio_core::listing::compose_listing;

    use super::*;

    #[tokio::test]
    async fn builds_once_until_invalidated() {
        let cache = ListingCache::new();
        let counter = AtomicUsize::new(0);
        let builds = &counter;
        let build = move || async move {
            builds.fetch_add(1, Ordering::SeqCst);
            (compose_listing(Vec::new(), Vec::new()), true)
        };

        cache.get_or_build(build).await;
        cache.get_or_build(build).await;
        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(cache.is_cached().await);

        cache.invalidate().await;
        assert!(!cache.is_cached().await);
        cache.get_or_build(build).await;
        assert_eq!(builds.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn incomplete_listing_is_not_stored() {
        let cache = ListingCache::new();
        let counter = AtomicUsize::new(0);
        let builds = &counter;
        let build = move || async move {
            builds.fetch_add(1, Ordering::SeqCst);
            (compose_listing(Vec::new(), Vec::new()), false)
        };

        cache.get_or_build(build).await;
        assert!(!cache.is_cached().await);
        cache.get_or_build(build).await;
        assert_eq!(builds.load(Ordering::SeqCst), 2);
    }
}
