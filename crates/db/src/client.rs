//! Process-wide database handle.
//!
//! The pool is created on first use and kept for the life of the process.
//! The connection string is re-read on every access, so removing
//! `DATABASE_URL` makes the next access fail even after the pool exists.
//! This lets the server start and render public pages without a database.

use tokio::sync::OnceCell;

use crate::{create_pool, DbPool};

/// Environment variable holding the Postgres connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Default pool size when `DATABASE_MAX_CONNECTIONS` is unset.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("DATABASE_URL is not configured")]
    NotConfigured,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug)]
enum UrlSource {
    /// Read the named environment variable at every access.
    Env(&'static str),
    /// Never configured.
    Missing,
    /// Pool supplied by the caller; always configured.
    Injected,
}

/// Lazily-connected handle to the portfolio database.
#[derive(Debug)]
pub struct Database {
    source: UrlSource,
    max_connections: u32,
    pool: OnceCell<DbPool>,
}

impl Database {
    /// Handle backed by `DATABASE_URL`. Does not connect.
    pub fn from_env(max_connections: u32) -> Self {
        Self::from_env_var(DATABASE_URL_VAR, max_connections)
    }

    pub(crate) fn from_env_var(var: &'static str, max_connections: u32) -> Self {
        Self {
            source: UrlSource::Env(var),
            max_connections,
            pool: OnceCell::new(),
        }
    }

    /// Handle that reports itself unconfigured on every access.
    pub fn unconfigured() -> Self {
        Self {
            source: UrlSource::Missing,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            pool: OnceCell::new(),
        }
    }

    /// Handle around an already-connected pool.
    pub fn from_pool(pool: DbPool) -> Self {
        Self {
            source: UrlSource::Injected,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            pool: OnceCell::new_with(Some(pool)),
        }
    }

    /// Whether a connection string is present right now.
    pub fn is_configured(&self) -> bool {
        match self.source {
            UrlSource::Injected => true,
            _ => self.connection_url().is_some(),
        }
    }

    /// Return the shared pool, connecting on first use.
    ///
    /// Fails with [`ClientError::NotConfigured`] whenever the connection
    /// string is absent, regardless of whether a pool was created earlier.
    pub async fn pool(&self) -> Result<&DbPool, ClientError> {
        if !self.is_configured() {
            return Err(ClientError::NotConfigured);
        }
        if let Some(pool) = self.pool.get() {
            return Ok(pool);
        }

        let url = self.connection_url().ok_or(ClientError::NotConfigured)?;
        let pool = self
            .pool
            .get_or_try_init(|| async {
                tracing::info!(
                    max_connections = self.max_connections,
                    "Creating database connection pool"
                );
                create_pool(&url, self.max_connections).await
            })
            .await?;
        Ok(pool)
    }

    fn connection_url(&self) -> Option<String> {
        match self.source {
            UrlSource::Env(var) => std::env::var(var).ok().filter(|v| !v.trim().is_empty()),
            UrlSource::Missing | UrlSource::Injected => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn unconfigured_handle_fails_on_access() {
        let db = Database::unconfigured();
        assert!(!db.is_configured());
        assert_matches!(db.pool().await, Err(ClientError::NotConfigured));
        // Still failing on a second access.
        assert_matches!(db.pool().await, Err(ClientError::NotConfigured));
    }

    #[tokio::test]
    async fn blank_or_missing_url_is_unconfigured() {
        const VAR: &str = "PORTFOLIO_TEST_URL_BLANK_OR_MISSING";
        let db = Database::from_env_var(VAR, 1);

        std::env::remove_var(VAR);
        assert!(!db.is_configured());
        assert_matches!(db.pool().await, Err(ClientError::NotConfigured));

        std::env::set_var(VAR, "   ");
        assert!(!db.is_configured());
        assert_matches!(db.pool().await, Err(ClientError::NotConfigured));

        std::env::set_var(VAR, "postgres://localhost/portfolio");
        assert!(db.is_configured());

        std::env::remove_var(VAR);
        assert!(!db.is_configured());
    }

    #[tokio::test]
    async fn url_is_checked_on_every_access() {
        const VAR: &str = "PORTFOLIO_TEST_URL_EVERY_ACCESS";
        let db = Database::from_env_var(VAR, 1);
        // Stands in for a pool created by an earlier access; never connects.
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/portfolio")
            .unwrap();
        db.pool.set(pool).unwrap();

        std::env::set_var(VAR, "postgres://localhost/portfolio");
        assert!(db.pool().await.is_ok());

        std::env::remove_var(VAR);
        assert_matches!(db.pool().await, Err(ClientError::NotConfigured));

        std::env::set_var(VAR, "postgres://localhost/portfolio");
        assert!(db.pool().await.is_ok());
        std::env::remove_var(VAR);
    }

    #[test]
    fn not_configured_message_names_the_variable() {
        assert_eq!(
            ClientError::NotConfigured.to_string(),
            "DATABASE_URL is not configured"
        );
    }
}
