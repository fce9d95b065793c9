//! Repository for the `projects` table.

use portfolio_core::project::NewProject;
use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, category, description, full_description, technologies, \
     image, screenshots, demo_url, github_url, status, created_at";

/// Provides list, create and delete for projects. There is no update.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `status` falls back to the column default if empty.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, category, description, full_description, technologies,
                 image, screenshots, demo_url, github_url, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE(NULLIF($10, ''), 'Completo'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.full_description)
            .bind(&input.technologies)
            .bind(&input.image)
            .bind(&input.screenshots)
            .bind(&input.demo_url)
            .bind(&input.github_url)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List all projects, most recently created first. Rows sharing a
    /// timestamp come back highest id first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of stored projects.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
