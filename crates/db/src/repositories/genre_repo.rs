//! Repository for the `genres` table.

use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::{CreateGenre, Genre};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row. Names are not deduplicated.
    pub async fn create(pool: &PgPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!("INSERT INTO genres (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a genre by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all genres in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Find every genre whose name is in `names`.
    ///
    /// Set membership: a name requested twice matches once, and a name held
    /// by two genres returns both rows.
    pub async fn find_by_names(pool: &PgPool, names: &[String]) -> Result<Vec<Genre>, sqlx::Error> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!("SELECT {COLUMNS} FROM genres WHERE name = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Genre>(&query)
            .bind(names)
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a genre by ID. Returns `true` if a row was removed.
    ///
    /// Does not touch movies; callers scrub the name first.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
