//! Movie model and DTOs.
//!
//! JSON field names are camelCase (`releaseDate`) to match the wire format
//! existing clients already speak.

use cinedex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A row from the `movies` table.
///
/// `genres` holds genre names in caller order. Duplicates are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub release_date: Timestamp,
    pub genres: Vec<String>,
}

/// DTO for creating a movie. Every genre name must exist at creation time.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    pub release_date: Timestamp,
    #[validate(custom(function = "validate_genre_names"))]
    pub genres: Vec<String>,
}

/// DTO for a partial movie update. `None` fields keep their stored value.
///
/// Genre names supplied here are not checked against the genre catalog.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovie {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<Timestamp>,
    #[validate(custom(function = "validate_genre_names"))]
    pub genres: Option<Vec<String>>,
}

impl UpdateMovie {
    /// Apply the present fields onto `movie`, leaving the rest untouched.
    pub fn merge_into(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            movie.description.clone_from(description);
        }
        if let Some(release_date) = self.release_date {
            movie.release_date = release_date;
        }
        if let Some(genres) = &self.genres {
            movie.genres.clone_from(genres);
        }
    }
}

/// One page of movies plus the total row count across all pages.
#[derive(Debug, Clone, Serialize)]
pub struct MoviePage {
    pub data: Vec<Movie>,
    pub count: i64,
}

fn validate_genre_names(genres: &[String]) -> Result<(), ValidationError> {
    if genres.iter().any(|g| g.is_empty()) {
        let mut err = ValidationError::new("empty_genre");
        err.message = Some("genre names must not be empty".into());
        return Err(err);
    }
    Ok(())
}
