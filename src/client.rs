use crate::models::{CategoryRow, DirectorRow, MoviePayload, MovieRecord};

/// Thin HTTP client for the REST API, used by the presentation gateway.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub async fn movies(&self) -> Result<Vec<MovieRecord>, reqwest::Error> {
        self.http
            .get(format!("{}/movies", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// The API answers the by-id lookup with a single-element array.
    pub async fn movie(&self, id: i32) -> Result<Option<MovieRecord>, reqwest::Error> {
        let rows: Vec<MovieRecord> = self
            .http
            .get(format!("{}/movies/{id}", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(rows.into_iter().next())
    }

    pub async fn categories(&self) -> Result<Vec<CategoryRow>, reqwest::Error> {
        self.http
            .get(format!("{}/categories", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn directors(&self) -> Result<Vec<DirectorRow>, reqwest::Error> {
        self.http
            .get(format!("{}/directors", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn create_movie(&self, payload: &MoviePayload) -> Result<(), reqwest::Error> {
        self.http
            .post(format!("{}/movies", self.base_url))
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn update_movie(&self, id: i32, payload: &MoviePayload) -> Result<(), reqwest::Error> {
        self.http
            .put(format!("{}/edit/{id}", self.base_url))
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn delete_movie(&self, id: i32) -> Result<(), reqwest::Error> {
        self.http
            .delete(format!("{}/delete/{id}", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
