use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Failures surfaced by the store and mapped to status codes by the API.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} is required")]
    Validation(&'static str),
    #[error("Category not in database")]
    CategoryNotFound,
    #[error("This movie already exists")]
    DuplicateMovie,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::CategoryNotFound | AppError::DuplicateMovie => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "database failure");
            return (status, "Internal Server Error").into_response();
        }
        (status, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Gateway-side failures. Upstream API errors render as a generic error page
/// with the cause logged, never leaked to the client.
#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    Upstream(anyhow::Error),
}

impl From<anyhow::Error> for WebError {
    fn from(err: anyhow::Error) -> Self {
        Self::Upstream(err)
    }
}

impl From<reqwest::Error> for WebError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(anyhow::Error::new(err))
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Html(crate::templates::error_page(msg))).into_response()
            }
            WebError::Upstream(err) => {
                tracing::error!(error = %err, "upstream request failed");
                let body = crate::templates::error_page(
                    "Something went wrong. Please try again later.".to_string(),
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
            }
        }
    }
}

pub type WebResult<T> = Result<T, WebError>;
