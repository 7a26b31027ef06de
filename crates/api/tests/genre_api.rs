//! Integration tests for the `/api/v1/genres` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_genre(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/genres", json!({ "name": name })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn create_movie(pool: &PgPool, title: &str, genres: &[&str]) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = json!({
        "title": title,
        "description": "",
        "releaseDate": "1999-03-31T00:00:00Z",
        "genres": genres,
    });
    let response = post_json(app, "/api/v1/movies", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_genre_returns_201_with_record(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/genres", json!({ "name": "Action" })).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Action");
    assert!(json["id"].as_i64().unwrap() > 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_genre_with_empty_name_is_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/genres", json!({ "name": "" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_genres_returns_bare_array(pool: PgPool) {
    create_genre(&pool, "Action").await;
    create_genre(&pool, "Drama").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/genres").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Action", "Drama"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_genre_names_are_accepted(pool: PgPool) {
    let first = create_genre(&pool, "Action").await;
    let second = create_genre(&pool, "Action").await;
    assert_ne!(first, second);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_genre_returns_deleted_record(pool: PgPool) {
    let id = create_genre(&pool, "Horror").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/genres/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Horror");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/genres").await).await;
    assert_eq!(json, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_genre_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/genres/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Genre with ID 999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_genre_scrubs_it_from_movies(pool: PgPool) {
    let action = create_genre(&pool, "Action").await;
    create_genre(&pool, "Drama").await;
    let heat = create_movie(&pool, "Heat", &["Action", "Drama"]).await;
    let speed = create_movie(&pool, "Speed", &["Action"]).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/genres/{action}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/movies/{heat}")).await).await;
    assert_eq!(json["genres"], json!(["Drama"]));

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/movies/{speed}")).await).await;
    assert_eq!(json["genres"], json!([]));

    // The scrubbed name can no longer be used for new movies.
    let app = common::build_test_app(pool);
    let body = json!({
        "title": "Point Break",
        "description": "",
        "releaseDate": "1991-07-12T00:00:00Z",
        "genres": ["Action"],
    });
    let response = post_json(app, "/api/v1/movies", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
