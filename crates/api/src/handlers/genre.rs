//! Handlers for the `/genres` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::types::DbId;
use cinedex_db::models::genre::CreateGenre;
use validator::Validate;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/genres
///
/// Create a genre. Names are not required to be unique.
pub async fn create_genre(
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let genre = state.genres.create(&input).await?;

    Ok((StatusCode::CREATED, Json(genre)))
}

/// GET /api/v1/genres
pub async fn list_genres(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = state.genres.find_all().await?;

    Ok(Json(genres))
}

/// DELETE /api/v1/genres/{id}
///
/// Delete a genre and scrub its name from every movie. Returns the deleted genre.
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let genre = state.genres.remove(genre_id).await?;

    Ok(Json(genre))
}
