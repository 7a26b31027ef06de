//! Movie catalog: validated creation, paging, partial update, removal and search.

use cinedex_core::catalog::{Pagination, SearchCriteria};
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::movie::{CreateMovie, Movie, MoviePage, UpdateMovie};

use crate::error::CatalogResult;
use crate::genre::GenreCatalog;
use crate::store::{GenreStore, MovieStore};

/// Owns the movie lifecycle.
///
/// Creation consults the genre catalog; every other operation touches
/// movie records only.
#[derive(Debug, Clone)]
pub struct MovieCatalog<S> {
    store: S,
    genres: GenreCatalog<S>,
}

impl<S> MovieCatalog<S>
where
    S: GenreStore + MovieStore + Clone,
{
    pub fn new(store: S) -> Self {
        Self {
            genres: GenreCatalog::new(store.clone()),
            store,
        }
    }

    /// Persist a new movie after checking that every genre name exists.
    ///
    /// The check and the insert are separate store calls. A genre deleted in
    /// between can leave the new movie referencing a removed name.
    pub async fn create(&self, input: &CreateMovie) -> CatalogResult<Movie> {
        self.genres.ensure_exist(&input.genres).await?;

        let movie = self.store.insert_movie(input).await?;
        tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");
        Ok(movie)
    }

    /// One page of movies plus the total count across all pages.
    pub async fn find_all(&self, pagination: Pagination) -> CatalogResult<MoviePage> {
        let (data, count) = self
            .store
            .find_and_count_movies(pagination.offset(), pagination.limit())
            .await?;
        Ok(MoviePage { data, count })
    }

    /// Look up a movie. Absence is not an error here.
    pub async fn find_one(&self, id: DbId) -> CatalogResult<Option<Movie>> {
        Ok(self.store.find_movie(id).await?)
    }

    /// Merge the present fields onto an existing movie.
    ///
    /// Genre names in the patch are stored as given, without an existence check.
    pub async fn update(&self, id: DbId, input: &UpdateMovie) -> CatalogResult<Movie> {
        let movie = self
            .store
            .update_movie(id, input)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Movie",
                id,
            })?;

        tracing::info!(movie_id = id, "Movie updated");
        Ok(movie)
    }

    /// Delete a movie and return it as it was before deletion.
    pub async fn remove(&self, id: DbId) -> CatalogResult<Movie> {
        let movie = self.find_one(id).await?.ok_or(CoreError::NotFound {
            entity: "Movie",
            id,
        })?;

        self.store.delete_movie(id).await?;

        tracing::info!(movie_id = id, "Movie deleted");
        Ok(movie)
    }

    /// Movies whose title contains `title` (case-insensitive) and/or whose
    /// genre list contains `genre` exactly. At least one must be non-empty.
    pub async fn search(
        &self,
        title: Option<String>,
        genre: Option<String>,
    ) -> CatalogResult<Vec<Movie>> {
        let criteria = SearchCriteria::new(title, genre)?;
        Ok(self.store.find_movies_where(&criteria).await?)
    }
}
