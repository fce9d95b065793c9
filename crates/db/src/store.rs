//! The storage seam the project operations run against.
//!
//! [`PgProjectStore`] is the production implementation. With the
//! `test-util` feature, `MemoryProjectStore` keeps rows in process for the
//! API tests.

#[cfg(any(test, feature = "test-util"))]
pub use memory::MemoryProjectStore;

use async_trait::async_trait;
use portfolio_core::project::NewProject;
use portfolio_core::types::DbId;

use crate::client::{ClientError, Database};
use crate::models::project::Project;
use crate::repositories::ProjectRepo;

#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Whether the backing datastore is configured right now.
    fn is_configured(&self) -> bool;

    /// All projects, newest first.
    async fn list(&self) -> Result<Vec<Project>, ClientError>;

    async fn create(&self, input: &NewProject) -> Result<Project, ClientError>;

    /// Delete by id. A missing row is an error.
    async fn delete(&self, id: DbId) -> Result<(), ClientError>;

    /// Round-trip to the datastore.
    async fn ping(&self) -> Result<(), ClientError>;
}

/// Postgres-backed store.
#[derive(Debug)]
pub struct PgProjectStore {
    db: Database,
}

impl PgProjectStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    fn is_configured(&self) -> bool {
        self.db.is_configured()
    }

    async fn list(&self) -> Result<Vec<Project>, ClientError> {
        let pool = self.db.pool().await?;
        Ok(ProjectRepo::list(pool).await?)
    }

    async fn create(&self, input: &NewProject) -> Result<Project, ClientError> {
        let pool = self.db.pool().await?;
        Ok(ProjectRepo::create(pool, input).await?)
    }

    async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let pool = self.db.pool().await?;
        if ProjectRepo::delete(pool, id).await? {
            Ok(())
        } else {
            Err(ClientError::Database(sqlx::Error::RowNotFound))
        }
    }

    async fn ping(&self) -> Result<(), ClientError> {
        let pool = self.db.pool().await?;
        Ok(crate::health_check(pool).await?)
    }
}

#[cfg(any(test, feature = "test-util"))]
mod memory {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use portfolio_core::project::NewProject;
    use portfolio_core::types::{DbId, Timestamp};

    use super::ProjectStore;
    use crate::client::ClientError;
    use crate::models::project::Project;

    #[derive(Debug, Default)]
    struct MemoryRows {
        next_id: DbId,
        last_created_at: Option<Timestamp>,
        rows: Vec<Project>,
    }

    /// In-process store with autoincrement ids and strictly increasing
    /// creation timestamps.
    #[derive(Debug)]
    pub struct MemoryProjectStore {
        configured: bool,
        failing: AtomicBool,
        rows: Mutex<MemoryRows>,
    }

    impl MemoryProjectStore {
        pub fn new() -> Self {
            Self {
                configured: true,
                failing: AtomicBool::new(false),
                rows: Mutex::new(MemoryRows {
                    next_id: 1,
                    ..Default::default()
                }),
            }
        }

        /// A store that reports no connection string.
        pub fn unconfigured() -> Self {
            Self {
                configured: false,
                ..Self::new()
            }
        }

        /// A configured store whose every call fails like a lost connection.
        pub fn failing() -> Self {
            Self {
                failing: AtomicBool::new(true),
                ..Self::new()
            }
        }

        /// Make every later call fail (`true`) or succeed again (`false`).
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn len(&self) -> usize {
            self.lock().rows.len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        fn lock(&self) -> std::sync::MutexGuard<'_, MemoryRows> {
            self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }

        fn check(&self) -> Result<(), ClientError> {
            if !self.configured {
                return Err(ClientError::NotConfigured);
            }
            if self.failing.load(Ordering::SeqCst) {
                return Err(ClientError::Database(sqlx::Error::PoolTimedOut));
            }
            Ok(())
        }
    }

    impl Default for MemoryProjectStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl ProjectStore for MemoryProjectStore {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn list(&self) -> Result<Vec<Project>, ClientError> {
            self.check()?;
            let mut rows = self.lock().rows.clone();
            rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
            Ok(rows)
        }

        async fn create(&self, input: &NewProject) -> Result<Project, ClientError> {
            self.check()?;
            let mut state = self.lock();

            let now = Utc::now();
            let created_at = match state.last_created_at {
                Some(last) if last >= now => last + Duration::microseconds(1),
                _ => now,
            };

            let project = Project {
                id: state.next_id,
                title: input.title.clone(),
                category: input.category.clone(),
                description: input.description.clone(),
                full_description: input.full_description.clone(),
                technologies: input.technologies.clone(),
                image: input.image.clone(),
                screenshots: input.screenshots.clone(),
                demo_url: input.demo_url.clone(),
                github_url: input.github_url.clone(),
                status: input.status.clone(),
                created_at,
            };

            state.next_id += 1;
            state.last_created_at = Some(created_at);
            state.rows.push(project.clone());
            Ok(project)
        }

        async fn delete(&self, id: DbId) -> Result<(), ClientError> {
            self.check()?;
            let mut state = self.lock();
            let before = state.rows.len();
            state.rows.retain(|p| p.id != id);
            if state.rows.len() == before {
                return Err(ClientError::Database(sqlx::Error::RowNotFound));
            }
            Ok(())
        }

        async fn ping(&self) -> Result<(), ClientError> {
            self.check()
        }
    }
}
