//! Handlers for the `/movies` resource.
//!
//! Provides create (with genre existence checks), paginated listing,
//! search by title and/or genre, lookup, partial update and delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::movie::{CreateMovie, UpdateMovie};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::{MovieSearchParams, PageParams};
use crate::state::AppState;

/// POST /api/v1/movies
///
/// Create a movie. Rejects with 400 if any genre name is unknown.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let movie = state.movies.create(&input).await?;

    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /api/v1/movies?page=&limit=
///
/// Returns `{ data, count }` where `count` is the total across all pages.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = state.movies.find_all(params.pagination()).await?;

    Ok(Json(page))
}

/// GET /api/v1/movies/search?title=&genre=
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieSearchParams>,
) -> AppResult<impl IntoResponse> {
    let movies = state.movies.search(params.title, params.genre).await?;

    Ok(Json(movies))
}

/// GET /api/v1/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = state
        .movies
        .find_one(movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;

    Ok(Json(movie))
}

/// PATCH /api/v1/movies/{id}
///
/// Merge the supplied fields onto the movie. Genre names are not re-checked.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let movie = state.movies.update(movie_id, &input).await?;

    Ok(Json(movie))
}

/// DELETE /api/v1/movies/{id}
///
/// Returns the movie as it was before deletion.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = state.movies.remove(movie_id).await?;

    Ok(Json(movie))
}
