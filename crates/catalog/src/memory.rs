//! In-memory store for catalog tests.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use cinedex_core::catalog::SearchCriteria;
use cinedex_core::types::DbId;
use cinedex_db::models::genre::{CreateGenre, Genre};
use cinedex_db::models::movie::{CreateMovie, Movie, UpdateMovie};

use crate::store::{GenreStore, MovieStore};

#[derive(Debug, Default)]
struct State {
    genres: Vec<Genre>,
    movies: Vec<Movie>,
    next_genre_id: DbId,
    next_movie_id: DbId,
    movie_writes: usize,
    fail_movie_listing: bool,
}

/// Vec-backed store implementing both ports. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Insert a movie directly, bypassing genre validation.
    pub fn seed_movie(&self, title: &str, genres: &[&str]) -> Movie {
        let mut state = self.lock();
        state.next_movie_id += 1;
        let movie = Movie {
            id: state.next_movie_id,
            title: title.to_string(),
            description: String::new(),
            release_date: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        };
        state.movies.push(movie.clone());
        movie
    }

    pub fn movie(&self, id: DbId) -> Movie {
        self.lock()
            .movies
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .unwrap()
    }

    /// Number of writes to existing movie rows.
    pub fn movie_writes(&self) -> usize {
        self.lock().movie_writes
    }

    /// Make every subsequent `list_movies` call fail.
    pub fn fail_movie_listing(&self) {
        self.lock().fail_movie_listing = true;
    }
}

#[async_trait]
impl GenreStore for MemoryStore {
    async fn insert_genre(&self, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let mut state = self.lock();
        state.next_genre_id += 1;
        let genre = Genre {
            id: state.next_genre_id,
            name: input.name.clone(),
        };
        state.genres.push(genre.clone());
        Ok(genre)
    }

    async fn find_genre(&self, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        Ok(self.lock().genres.iter().find(|g| g.id == id).cloned())
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, sqlx::Error> {
        Ok(self.lock().genres.clone())
    }

    async fn find_genres_by_names(&self, names: &[String]) -> Result<Vec<Genre>, sqlx::Error> {
        Ok(self
            .lock()
            .genres
            .iter()
            .filter(|g| names.contains(&g.name))
            .cloned()
            .collect())
    }

    async fn delete_genre(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut state = self.lock();
        let before = state.genres.len();
        state.genres.retain(|g| g.id != id);
        Ok(state.genres.len() != before)
    }
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn insert_movie(&self, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let mut state = self.lock();
        state.next_movie_id += 1;
        let movie = Movie {
            id: state.next_movie_id,
            title: input.title.clone(),
            description: input.description.clone(),
            release_date: input.release_date,
            genres: input.genres.clone(),
        };
        state.movies.push(movie.clone());
        Ok(movie)
    }

    async fn find_movie(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        Ok(self.lock().movies.iter().find(|m| m.id == id).cloned())
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, sqlx::Error> {
        let state = self.lock();
        if state.fail_movie_listing {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(state.movies.clone())
    }

    async fn find_and_count_movies(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Movie>, i64), sqlx::Error> {
        let state = self.lock();
        let rows = state
            .movies
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((rows, state.movies.len() as i64))
    }

    async fn find_movies_where(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        Ok(self
            .lock()
            .movies
            .iter()
            .filter(|m| criteria.matches(&m.title, &m.genres))
            .cloned()
            .collect())
    }

    async fn update_movie(
        &self,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let mut state = self.lock();
        let Some(index) = state.movies.iter().position(|m| m.id == id) else {
            return Ok(None);
        };
        state.movie_writes += 1;
        let movie = &mut state.movies[index];
        input.merge_into(movie);
        Ok(Some(movie.clone()))
    }

    async fn set_movie_genres(
        &self,
        id: DbId,
        genres: &[String],
    ) -> Result<Option<Movie>, sqlx::Error> {
        let mut state = self.lock();
        let Some(index) = state.movies.iter().position(|m| m.id == id) else {
            return Ok(None);
        };
        state.movie_writes += 1;
        let movie = &mut state.movies[index];
        movie.genres = genres.to_vec();
        Ok(Some(movie.clone()))
    }

    async fn delete_movie(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut state = self.lock();
        let before = state.movies.len();
        state.movies.retain(|m| m.id != id);
        Ok(state.movies.len() != before)
    }
}
