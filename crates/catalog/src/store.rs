//! Storage abstraction used by the catalogs.
//!
//! One trait per entity type. Each call is a single independent store
//! operation; nothing here spans a transaction.

use async_trait::async_trait;
use cinedex_core::catalog::SearchCriteria;
use cinedex_core::types::DbId;
use cinedex_db::models::genre::{CreateGenre, Genre};
use cinedex_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use cinedex_db::repositories::{GenreRepo, MovieRepo};
use cinedex_db::DbPool;

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

#[async_trait]
pub trait GenreStore: Send + Sync {
    async fn insert_genre(&self, input: &CreateGenre) -> Result<Genre, sqlx::Error>;
    async fn find_genre(&self, id: DbId) -> Result<Option<Genre>, sqlx::Error>;
    async fn list_genres(&self) -> Result<Vec<Genre>, sqlx::Error>;
    /// Genres whose name is in `names` (set membership).
    async fn find_genres_by_names(&self, names: &[String]) -> Result<Vec<Genre>, sqlx::Error>;
    /// Returns `true` if a row was removed.
    async fn delete_genre(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn insert_movie(&self, input: &CreateMovie) -> Result<Movie, sqlx::Error>;
    async fn find_movie(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error>;
    async fn list_movies(&self) -> Result<Vec<Movie>, sqlx::Error>;
    /// One page of movies plus the total count ignoring pagination.
    async fn find_and_count_movies(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Movie>, i64), sqlx::Error>;
    async fn find_movies_where(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<Movie>, sqlx::Error>;
    /// Merge present fields. `None` if the movie does not exist.
    async fn update_movie(
        &self,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error>;
    /// Replace the genre list. `None` if the movie does not exist.
    async fn set_movie_genres(
        &self,
        id: DbId,
        genres: &[String],
    ) -> Result<Option<Movie>, sqlx::Error>;
    /// Returns `true` if a row was removed.
    async fn delete_movie(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

// ---------------------------------------------------------------------------
// Postgres
// ---------------------------------------------------------------------------

/// Postgres-backed store. Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreStore for PgStore {
    async fn insert_genre(&self, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        GenreRepo::create(&self.pool, input).await
    }

    async fn find_genre(&self, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        GenreRepo::find_by_id(&self.pool, id).await
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, sqlx::Error> {
        GenreRepo::list(&self.pool).await
    }

    async fn find_genres_by_names(&self, names: &[String]) -> Result<Vec<Genre>, sqlx::Error> {
        GenreRepo::find_by_names(&self.pool, names).await
    }

    async fn delete_genre(&self, id: DbId) -> Result<bool, sqlx::Error> {
        GenreRepo::delete(&self.pool, id).await
    }
}

#[async_trait]
impl MovieStore for PgStore {
    async fn insert_movie(&self, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        MovieRepo::create(&self.pool, input).await
    }

    async fn find_movie(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::find_by_id(&self.pool, id).await
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, sqlx::Error> {
        MovieRepo::list(&self.pool).await
    }

    async fn find_and_count_movies(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Movie>, i64), sqlx::Error> {
        MovieRepo::list_page(&self.pool, offset, limit).await
    }

    async fn find_movies_where(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        MovieRepo::search(&self.pool, criteria).await
    }

    async fn update_movie(
        &self,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::update(&self.pool, id, input).await
    }

    async fn set_movie_genres(
        &self,
        id: DbId,
        genres: &[String],
    ) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::set_genres(&self.pool, id, genres).await
    }

    async fn delete_movie(&self, id: DbId) -> Result<bool, sqlx::Error> {
        MovieRepo::delete(&self.pool, id).await
    }
}
