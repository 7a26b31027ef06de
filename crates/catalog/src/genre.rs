//! Genre catalog: create, list, existence checks and cascading removal.

use cinedex_core::catalog::{distinct_names, ensure_genres_exist, scrub_genre};
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::genre::{CreateGenre, Genre};

use crate::error::CatalogResult;
use crate::store::{GenreStore, MovieStore};

/// Owns the genre lifecycle.
///
/// Removing a genre also rewrites movie records: the genre's name is
/// scrubbed from every movie's list before the genre row is deleted.
#[derive(Debug, Clone)]
pub struct GenreCatalog<S> {
    store: S,
}

impl<S> GenreCatalog<S>
where
    S: GenreStore + MovieStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a new genre. Duplicate names are accepted.
    pub async fn create(&self, input: &CreateGenre) -> CatalogResult<Genre> {
        let genre = self.store.insert_genre(input).await?;
        tracing::info!(genre_id = genre.id, name = %genre.name, "Genre created");
        Ok(genre)
    }

    /// All genres in store order.
    pub async fn find_all(&self) -> CatalogResult<Vec<Genre>> {
        Ok(self.store.list_genres().await?)
    }

    /// Reject with `InvalidRequest` unless every name matches an existing genre.
    ///
    /// The message lists each missing name once, in first-occurrence order.
    pub async fn ensure_exist(&self, names: &[String]) -> CatalogResult<()> {
        let found = self.existing_names(names).await?;
        ensure_genres_exist(names, &found)?;
        Ok(())
    }

    async fn existing_names(&self, names: &[String]) -> CatalogResult<Vec<String>> {
        let genres = self
            .store
            .find_genres_by_names(&distinct_names(names))
            .await?;
        Ok(genres.into_iter().map(|g| g.name).collect())
    }

    /// Delete a genre and scrub its name from every movie.
    ///
    /// Steps run independently, not in a transaction: movies are rewritten
    /// first, then the genre row is deleted. A failure in between leaves the
    /// genre present with some or all movies already scrubbed. Only movies
    /// whose list actually changes are written.
    pub async fn remove(&self, id: DbId) -> CatalogResult<Genre> {
        let genre = self
            .store
            .find_genre(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Genre",
                id,
            })?;

        let movies = self.store.list_movies().await?;
        let mut scrubbed = 0usize;
        for mut movie in movies {
            if scrub_genre(&mut movie.genres, &genre.name) {
                // A movie deleted since the scan has nothing left to scrub.
                if self
                    .store
                    .set_movie_genres(movie.id, &movie.genres)
                    .await?
                    .is_some()
                {
                    scrubbed += 1;
                }
            }
        }

        self.store.delete_genre(id).await?;

        tracing::info!(genre_id = id, name = %genre.name, scrubbed, "Genre deleted");

        Ok(genre)
    }
}
