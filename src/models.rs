use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// Movie row joined with its director's and category's display names.
#[derive(Clone, Debug, FromQueryResult, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: i32,
    pub title: String,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub director_id: i32,
    pub category_id: i32,
    pub review: Option<String>,
    pub image: Option<String>,
    pub slug: String,
    pub custom_order: Option<i32>,
    pub director: String,
    pub category: String,
}

/// Create/update body for a movie. Absent fields are left untouched on
/// update; title, director and categoryId are validated by the store.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MoviePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(rename = "categoryId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectorPayload {
    pub director: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: i32,
    pub category: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectorRow {
    pub id: i32,
    pub director: String,
}

/// Raw HTML form submission from the gateway. Everything arrives as text;
/// empty fields are dropped and numeric fields parsed before the payload is
/// relayed to the API.
#[derive(Debug, Deserialize)]
pub struct MovieForm {
    pub title: Option<String>,
    pub director: Option<String>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
    pub year: Option<String>,
    pub rating: Option<String>,
    pub review: Option<String>,
    pub image: Option<String>,
}

impl MovieForm {
    pub fn into_payload(self) -> MoviePayload {
        MoviePayload {
            title: non_empty(self.title),
            director: non_empty(self.director),
            category_id: non_empty(self.category_id).and_then(|s| s.parse().ok()),
            year: non_empty(self.year).and_then(|s| s.parse().ok()),
            rating: non_empty(self.rating).and_then(|s| s.parse().ok()),
            review: non_empty(self.review),
            image: non_empty(self.image),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
