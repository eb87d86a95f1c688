use axum::{
    Router,
    extract::{Form, Path, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    client::ApiClient,
    error::{WebError, WebResult},
    models::{CategoryRow, DirectorRow, MovieForm, MoviePayload, MovieRecord},
    templates,
};

pub fn router(api: ApiClient) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/form", get(new_form))
        .route("/form/{id}", get(edit_form))
        .route("/movies", post(create))
        .route("/update/{id}", post(update))
        .route("/delete/{id}", get(delete))
        .with_state(api)
        .layer(TraceLayer::new_for_http())
}

async fn index(State(api): State<ApiClient>) -> WebResult<Html<String>> {
    let movies = api.movies().await?;
    Ok(Html(templates::index_page(&movies)))
}

async fn new_form(State(api): State<ApiClient>) -> WebResult<Html<String>> {
    let (categories, directors) = tokio::try_join!(api.categories(), api.directors())?;
    Ok(Html(templates::form_page("New Movie", "Add", None, &categories, &directors)))
}

/// Edit form: the movie, the category list and the director list are
/// independent reads, fetched concurrently.
async fn edit_form(
    State(api): State<ApiClient>,
    Path(id): Path<i32>,
) -> WebResult<Html<String>> {
    let (movie, categories, directors) =
        tokio::try_join!(api.movie(id), api.categories(), api.directors())?;
    let movie = movie.ok_or_else(|| anyhow::anyhow!("movie {id} missing from API response"))?;
    let movie = enrich(movie, &categories, &directors);
    Ok(Html(templates::form_page("Update Movie", "Edit", Some(&movie), &categories, &directors)))
}

async fn create(
    State(api): State<ApiClient>,
    Form(form): Form<MovieForm>,
) -> WebResult<Redirect> {
    let payload = form.into_payload();
    require_movie_fields(&payload)?;
    api.create_movie(&payload).await?;
    Ok(Redirect::to("/"))
}

async fn update(
    State(api): State<ApiClient>,
    Path(id): Path<i32>,
    Form(form): Form<MovieForm>,
) -> WebResult<Redirect> {
    let payload = form.into_payload();
    require_movie_fields(&payload)?;
    api.update_movie(id, &payload).await?;
    Ok(Redirect::to("/"))
}

async fn delete(State(api): State<ApiClient>, Path(id): Path<i32>) -> WebResult<Redirect> {
    api.delete_movie(id).await?;
    Ok(Redirect::to("/"))
}

fn require_movie_fields(payload: &MoviePayload) -> Result<(), WebError> {
    if payload.title.is_none() {
        return Err(WebError::BadRequest("Title is required".to_string()));
    }
    if payload.director.is_none() {
        return Err(WebError::BadRequest("Director is required".to_string()));
    }
    if payload.category_id.is_none() {
        return Err(WebError::BadRequest("Category Id is required".to_string()));
    }
    Ok(())
}

/// Resolve display names from the fetched lists, tolerating referential
/// drift between the movie row and the lists.
fn enrich(
    mut movie: MovieRecord,
    categories: &[CategoryRow],
    directors: &[DirectorRow],
) -> MovieRecord {
    movie.category = categories
        .iter()
        .find(|c| c.id == movie.category_id)
        .map(|c| c.category.clone())
        .unwrap_or_else(|| "Unknown category".to_string());
    movie.director = directors
        .iter()
        .find(|d| d.id == movie.director_id)
        .map(|d| d.director.clone())
        .unwrap_or_else(|| "Unknown director".to_string());
    movie
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MovieRecord {
        MovieRecord {
            id: 1,
            title: "Heat".to_string(),
            year: Some(1995),
            rating: Some(8.3),
            director_id: 7,
            category_id: 3,
            review: None,
            image: None,
            slug: "heat".to_string(),
            custom_order: None,
            director: String::new(),
            category: String::new(),
        }
    }

    #[test]
    fn enrich_resolves_names_from_lists() {
        let categories = vec![CategoryRow { id: 3, category: "Drama".to_string() }];
        let directors = vec![DirectorRow { id: 7, director: "Michael Mann".to_string() }];
        let movie = enrich(record(), &categories, &directors);
        assert_eq!(movie.category, "Drama");
        assert_eq!(movie.director, "Michael Mann");
    }

    #[test]
    fn enrich_defaults_on_missing_ids() {
        let movie = enrich(record(), &[], &[]);
        assert_eq!(movie.category, "Unknown category");
        assert_eq!(movie.director, "Unknown director");
    }
}
