use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gigbook_core::error::CoreError;

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to render the 404 and 500 error pages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gigbook_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No route or resource matches the request path.
    #[error("Page not found")]
    PageNotFound,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                StatusCode::NOT_FOUND
            }
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::PageNotFound => StatusCode::NOT_FOUND,
        };

        views::errors::error_response(status)
    }
}

/// Classify a sqlx error into an HTTP status.
///
/// - `RowNotFound` maps to 404.
/// - Everything else is logged and maps to 500.
fn classify_sqlx_error(err: &sqlx::Error) -> StatusCode {
    match err {
        sqlx::Error::RowNotFound => StatusCode::NOT_FOUND,
        other => {
            tracing::error!(error = %other, "Database error");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
