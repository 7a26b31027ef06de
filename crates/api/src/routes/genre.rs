//! Route definitions for genres.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::genre;
use crate::state::AppState;

/// Genre routes mounted at `/genres`.
///
/// ```text
/// GET    /        -> list_genres
/// POST   /        -> create_genre
/// DELETE /{id}    -> delete_genre
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(genre::list_genres).post(genre::create_genre))
        .route("/{id}", delete(genre::delete_genre))
}
