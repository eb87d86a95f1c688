use reelbase::{db, error::AppError, models::MoviePayload, store::MovieStore};

/// Seeded category ids come from the migration's starter set; 1 is Action.
const ACTION: i32 = 1;
const DRAMA: i32 = 3;

async fn test_store() -> MovieStore {
    let db = db::connect_and_migrate("sqlite::memory:").await.expect("in-memory db");
    MovieStore::new(db)
}

fn payload(title: &str, director: &str, category_id: i32) -> MoviePayload {
    MoviePayload {
        title: Some(title.to_string()),
        director: Some(director.to_string()),
        category_id: Some(category_id),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_inserts_exactly_one_new_director() {
    let store = test_store().await;

    store.create(payload("Heat", "Michael Mann", ACTION)).await.unwrap();

    let directors = store.directors().await.unwrap();
    assert_eq!(directors.len(), 1);
    assert_eq!(directors[0].director, "Michael Mann");
}

#[tokio::test]
async fn same_director_name_is_reused() {
    let store = test_store().await;

    let first = store.create(payload("Heat", "Michael Mann", ACTION)).await.unwrap();
    let second = store.create(payload("Collateral", "Michael Mann", ACTION)).await.unwrap();

    assert_eq!(first.director_id, second.director_id);
    assert_eq!(store.directors().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_last_movie_removes_orphan_director() {
    let store = test_store().await;

    let movie = store.create(payload("Heat", "Michael Mann", ACTION)).await.unwrap();
    store.delete(movie.id).await.unwrap();

    assert!(store.directors().await.unwrap().is_empty());
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_one_of_two_movies_keeps_shared_director() {
    let store = test_store().await;

    let first = store.create(payload("Heat", "Michael Mann", ACTION)).await.unwrap();
    store.create(payload("Collateral", "Michael Mann", ACTION)).await.unwrap();

    store.delete(first.id).await.unwrap();

    let directors = store.directors().await.unwrap();
    assert_eq!(directors.len(), 1);
    assert_eq!(directors[0].director, "Michael Mann");
}

#[tokio::test]
async fn unknown_category_is_rejected_and_rolled_back() {
    let store = test_store().await;

    let err = store.create(payload("Heat", "Michael Mann", 999)).await.unwrap_err();
    assert!(matches!(err, AppError::CategoryNotFound));

    // the transaction rollback also removes the director resolved on the way
    assert!(store.directors().await.unwrap().is_empty());
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_title_director_category_is_rejected() {
    let store = test_store().await;

    store.create(payload("Heat", "Michael Mann", ACTION)).await.unwrap();
    let err = store.create(payload("heat", "Michael Mann", ACTION)).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateMovie));
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn same_title_different_category_is_allowed() {
    let store = test_store().await;

    store.create(payload("Heat", "Michael Mann", ACTION)).await.unwrap();
    store.create(payload("Heat", "Michael Mann", DRAMA)).await.unwrap();
    assert_eq!(store.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn missing_fields_are_validation_errors() {
    let store = test_store().await;

    let err = store
        .create(MoviePayload { director: Some("X".into()), category_id: Some(ACTION), ..Default::default() })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation("Title")));

    let err = store
        .create(MoviePayload { title: Some("  ".into()), director: Some("X".into()), category_id: Some(ACTION), ..Default::default() })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation("Title")));

    let err = store
        .create(MoviePayload { title: Some("Heat".into()), category_id: Some(ACTION), ..Default::default() })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation("Director")));

    let err = store
        .create(MoviePayload { title: Some("Heat".into()), director: Some("X".into()), ..Default::default() })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation("Category Id")));

    assert!(store.directors().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_missing_movie_is_not_found() {
    let store = test_store().await;

    let err = store.update(42, payload("Heat", "Michael Mann", ACTION)).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_with_only_rating_leaves_other_fields_alone() {
    let store = test_store().await;

    let created = store
        .create(MoviePayload {
            review: Some("Tight and relentless.".to_string()),
            year: Some(1995),
            ..payload("Heat", "Michael Mann", ACTION)
        })
        .await
        .unwrap();

    let updated = store
        .update(
            created.id,
            MoviePayload { rating: Some(4.5), ..payload("Heat", "Michael Mann", ACTION) },
        )
        .await
        .unwrap();

    assert_eq!(updated.rating, Some(4.5));
    assert_eq!(updated.title, "Heat");
    assert_eq!(updated.slug, "heat");
    assert_eq!(updated.year, Some(1995));
    assert_eq!(updated.review.as_deref(), Some("Tight and relentless."));
}

#[tokio::test]
async fn update_title_recomputes_slug() {
    let store = test_store().await;

    let created = store.create(payload("Heat", "Michael Mann", ACTION)).await.unwrap();
    let updated = store
        .update(created.id, payload("Heat 2: Vengeance", "Michael Mann", ACTION))
        .await
        .unwrap();

    assert_eq!(updated.title, "Heat 2: Vengeance");
    assert_eq!(updated.slug, "heat-2-vengeance");
}

#[tokio::test]
async fn lookup_by_slug_returns_enriched_record() {
    let store = test_store().await;

    store.create(payload("Mad Max: Fury Road", "George Miller", ACTION)).await.unwrap();

    let movie = store.get_by_slug("mad-max-fury-road").await.unwrap();
    assert_eq!(movie.title, "Mad Max: Fury Road");
    assert_eq!(movie.director, "George Miller");
    assert_eq!(movie.category, "Action");

    let err = store.get_by_slug("nope").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn delete_missing_movie_is_not_found() {
    let store = test_store().await;

    let err = store.delete(1).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
