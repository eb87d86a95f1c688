use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
};
use serde_json::{Value, json};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    entities::{category, director},
    error::AppResult,
    models::{DirectorPayload, MoviePayload, MovieRecord},
    store::MovieStore,
};

pub fn router(store: MovieStore) -> Router {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/{id}", get(get_movie))
        .route("/movies/slug/{slug}", get(get_movie_by_slug))
        .route("/categories", get(list_categories))
        .route("/directors", get(list_directors).post(create_director))
        .route("/edit/{id}", put(update_movie))
        .route("/delete/{id}", delete(delete_movie))
        .with_state(store)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

async fn list_movies(State(store): State<MovieStore>) -> AppResult<Json<Vec<MovieRecord>>> {
    Ok(Json(store.list().await?))
}

/// The by-id lookup answers with a single-element array, the shape the
/// gateway's form loader consumes.
async fn get_movie(
    State(store): State<MovieStore>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<MovieRecord>>> {
    Ok(Json(vec![store.get(id).await?]))
}

async fn get_movie_by_slug(
    State(store): State<MovieStore>,
    Path(slug): Path<String>,
) -> AppResult<Json<MovieRecord>> {
    Ok(Json(store.get_by_slug(&slug).await?))
}

async fn list_categories(State(store): State<MovieStore>) -> AppResult<Json<Vec<category::Model>>> {
    Ok(Json(store.categories().await?))
}

async fn list_directors(State(store): State<MovieStore>) -> AppResult<Json<Vec<director::Model>>> {
    Ok(Json(store.directors().await?))
}

async fn create_movie(
    State(store): State<MovieStore>,
    Json(payload): Json<MoviePayload>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let movie = store.create(payload).await?;
    tracing::debug!(id = movie.id, slug = %movie.slug, "movie created");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Movie successfully added", "movie": movie })),
    ))
}

async fn create_director(
    State(store): State<MovieStore>,
    Json(payload): Json<DirectorPayload>,
) -> AppResult<(StatusCode, Json<director::Model>)> {
    let created = store.create_director(payload.director.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_movie(
    State(store): State<MovieStore>,
    Path(id): Path<i32>,
    Json(payload): Json<MoviePayload>,
) -> AppResult<Json<Value>> {
    let movie = store.update(id, payload).await?;
    Ok(Json(json!({ "message": "Movie has been updated successfully", "movie": movie })))
}

async fn delete_movie(
    State(store): State<MovieStore>,
    Path(id): Path<i32>,
) -> AppResult<&'static str> {
    store.delete(id).await?;
    Ok("Movie and unused director successfully deleted")
}
