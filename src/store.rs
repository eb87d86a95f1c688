use sea_orm::sea_query::{Expr, Func, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
    TransactionTrait,
};

use crate::{
    entities::{category, director, movie},
    error::{AppError, AppResult},
    models::{MoviePayload, MovieRecord},
    slug::slugify,
};

/// CRUD over the movie catalog plus the director/category normalization that
/// happens on every write.
///
/// Multi-statement operations run inside a transaction, so a category reject
/// during create also rolls back any director inserted while resolving it.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<MovieRecord>> {
        let movies = enriched()
            .order_by_asc(movie::Column::CustomOrder)
            .into_model::<MovieRecord>()
            .all(&self.db)
            .await?;
        Ok(movies)
    }

    pub async fn get(&self, id: i32) -> AppResult<MovieRecord> {
        enriched()
            .filter(movie::Column::Id.eq(id))
            .into_model::<MovieRecord>()
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Movie"))
    }

    pub async fn get_by_slug(&self, slug: &str) -> AppResult<MovieRecord> {
        enriched()
            .filter(movie::Column::Slug.eq(slug))
            .into_model::<MovieRecord>()
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Movie"))
    }

    pub async fn create(&self, payload: MoviePayload) -> AppResult<MovieRecord> {
        let title = required(payload.title.as_deref(), "Title")?;
        let director = required(payload.director.as_deref(), "Director")?;
        let category_id = payload.category_id.ok_or(AppError::Validation("Category Id"))?;

        let txn = self.db.begin().await?;

        let director_id = resolve_director(&txn, director).await?;
        let category_id = resolve_category(&txn, category_id).await?;

        let duplicate = movie::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(movie::Column::Title))).eq(title.to_lowercase()),
            )
            .filter(movie::Column::DirectorId.eq(director_id))
            .filter(movie::Column::CategoryId.eq(category_id))
            .one(&txn)
            .await?;
        if duplicate.is_some() {
            return Err(AppError::DuplicateMovie);
        }

        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(title.to_string()),
            year: Set(payload.year),
            rating: Set(payload.rating),
            director_id: Set(director_id),
            category_id: Set(category_id),
            review: Set(payload.review),
            image: Set(payload.image),
            slug: Set(slugify(title)),
            custom_order: Set(None),
        };
        let inserted = movie::Entity::insert(model).exec(&txn).await?;
        txn.commit().await?;

        self.get(inserted.last_insert_id).await
    }

    pub async fn update(&self, id: i32, payload: MoviePayload) -> AppResult<MovieRecord> {
        let title = required(payload.title.as_deref(), "Title")?;
        let director = required(payload.director.as_deref(), "Director")?;
        let category_id = payload.category_id.ok_or(AppError::Validation("Category Id"))?;

        let txn = self.db.begin().await?;

        let existing = movie::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound("Movie"))?;

        let director_id = resolve_director(&txn, director).await?;
        let category_id = resolve_category(&txn, category_id).await?;

        // Only supplied fields are touched; a supplied title always carries a
        // freshly computed slug.
        let mut model: movie::ActiveModel = existing.into();
        model.title = Set(title.to_string());
        model.slug = Set(slugify(title));
        if let Some(year) = payload.year {
            model.year = Set(Some(year));
        }
        if let Some(rating) = payload.rating {
            model.rating = Set(Some(rating));
        }
        if let Some(review) = payload.review {
            model.review = Set(Some(review));
        }
        if let Some(image) = payload.image {
            model.image = Set(Some(image));
        }
        model.director_id = Set(director_id);
        model.category_id = Set(category_id);

        model.update(&txn).await?;
        txn.commit().await?;

        self.get(id).await
    }

    /// Deletes a movie and, when it was the last one referencing its
    /// director, the director row as well. The director id is captured
    /// before the movie row goes away and the orphan check runs after it.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let existing = movie::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound("Movie"))?;
        let director_id = existing.director_id;

        movie::Entity::delete_by_id(id).exec(&txn).await?;

        let remaining = movie::Entity::find()
            .filter(movie::Column::DirectorId.eq(director_id))
            .count(&txn)
            .await?;
        if remaining == 0 {
            director::Entity::delete_by_id(director_id).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    pub async fn categories(&self) -> AppResult<Vec<category::Model>> {
        Ok(category::Entity::find().all(&self.db).await?)
    }

    pub async fn directors(&self) -> AppResult<Vec<director::Model>> {
        Ok(director::Entity::find().all(&self.db).await?)
    }

    pub async fn create_director(&self, name: Option<&str>) -> AppResult<director::Model> {
        let name = required(name, "Director")?;
        let id = resolve_director(&self.db, name).await?;
        director::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Director"))
    }
}

/// Base query for enriched movie records: the movie row joined with its
/// director's and category's display names.
fn enriched() -> Select<movie::Entity> {
    movie::Entity::find()
        .join(JoinType::InnerJoin, movie::Relation::Director.def())
        .join(JoinType::InnerJoin, movie::Relation::Category.def())
        .column_as(director::Column::Director, "director")
        .column_as(category::Column::Category, "category")
}

/// Find-or-create by exact name. The unique index on the name column makes
/// concurrent identical inserts converge on a single row.
async fn resolve_director<C: ConnectionTrait>(conn: &C, name: &str) -> AppResult<i32> {
    if let Some(existing) = director::Entity::find()
        .filter(director::Column::Director.eq(name))
        .one(conn)
        .await?
    {
        return Ok(existing.id);
    }

    let insert = director::Entity::insert(director::ActiveModel {
        id: Default::default(),
        director: Set(name.to_string()),
    })
    .on_conflict(OnConflict::column(director::Column::Director).do_nothing().to_owned())
    .exec(conn)
    .await;

    match insert {
        Ok(res) => Ok(res.last_insert_id),
        // another writer inserted the same name first
        Err(DbErr::RecordNotInserted) => director::Entity::find()
            .filter(director::Column::Director.eq(name))
            .one(conn)
            .await?
            .map(|d| d.id)
            .ok_or(AppError::NotFound("Director")),
        Err(err) => Err(err.into()),
    }
}

/// Categories are never auto-created; an unknown id is a reject.
async fn resolve_category<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<i32> {
    category::Entity::find_by_id(id)
        .one(conn)
        .await?
        .map(|c| c.id)
        .ok_or(AppError::CategoryNotFound)
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(field)),
    }
}
