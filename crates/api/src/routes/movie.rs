//! Route definitions for movies.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Movie routes mounted at `/movies`.
///
/// ```text
/// GET    /         -> list_movies
/// POST   /         -> create_movie
/// GET    /search   -> search_movies
/// GET    /{id}     -> get_movie
/// PATCH  /{id}     -> update_movie
/// DELETE /{id}     -> delete_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list_movies).post(movie::create_movie))
        .route("/search", get(movie::search_movies))
        .route(
            "/{id}",
            get(movie::get_movie)
                .patch(movie::update_movie)
                .delete(movie::delete_movie),
        )
}
