//! Repository for the `movies` table.

use cinedex_core::catalog::SearchCriteria;
use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, release_date, genres";

/// Provides CRUD and search operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    ///
    /// `genres` is stored exactly as given. Existence checks belong to the caller.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, description, release_date, genres)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.release_date)
            .bind(&input.genres)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every movie in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Fetch one page of movies together with the total movie count.
    ///
    /// `offset` and `limit` must be non-negative; Postgres rejects negative values.
    pub async fn list_page(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Movie>, i64), sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, Movie>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await?;

        Ok((rows, total))
    }

    /// Update a movie. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                release_date = COALESCE($4, release_date),
                genres = COALESCE($5, genres)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.release_date)
            .bind(&input.genres)
            .fetch_optional(pool)
            .await
    }

    /// Replace a movie's genre list. Returns `None` if the movie does not exist.
    pub async fn set_genres(
        pool: &PgPool,
        id: DbId,
        genres: &[String],
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("UPDATE movies SET genres = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(genres)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find movies matching a title substring and/or an exact genre name.
    ///
    /// Every caller-supplied value is bound as a parameter; the query text is
    /// assembled only from fixed fragments.
    pub async fn search(
        pool: &PgPool,
        criteria: &SearchCriteria,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let (where_clause, title_pattern) = build_search_filter(criteria);

        let query = format!("SELECT {COLUMNS} FROM movies {where_clause} ORDER BY id");
        let mut q = sqlx::query_as::<_, Movie>(&query);

        // Bind dynamic parameters in placeholder order.
        if let Some(pattern) = title_pattern {
            q = q.bind(pattern);
        }
        if let Some(genre) = criteria.genre() {
            q = q.bind(genre);
        }

        q.fetch_all(pool).await
    }
}

/// Build the WHERE clause for [`MovieRepo::search`].
///
/// Returns the clause and the title pattern to bind first, if any. The genre,
/// if present, is bound after it.
fn build_search_filter(criteria: &SearchCriteria) -> (String, Option<String>) {
    let mut conditions = Vec::new();
    let mut bind_idx = 1u32;

    let title_pattern = criteria.title_pattern();
    if title_pattern.is_some() {
        conditions.push(format!("title ILIKE ${bind_idx}"));
        bind_idx += 1;
    }
    if criteria.genre().is_some() {
        conditions.push(format!("${bind_idx} = ANY(genres)"));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, title_pattern)
}
