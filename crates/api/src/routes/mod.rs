pub mod genre;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /genres                                          list, create
/// /genres/{id}                                     delete (scrubs movies)
///
/// /movies                                          list (?page, ?limit), create
/// /movies/search                                   search (?title, ?genre)
/// /movies/{id}                                     get, partial update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/genres", genre::router())
        .nest("/movies", movie::router())
}
