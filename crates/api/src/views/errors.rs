//! 404 and 500 pages.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::layout;

/// Render the error page for `status`.
pub fn error_response(status: StatusCode) -> Response {
    let (title, text) = match status {
        StatusCode::NOT_FOUND => ("Not Found", "The page you are looking for does not exist."),
        _ => (
            "Server Error",
            "Something went wrong on our end. Please try again later.",
        ),
    };
    let body = format!(
        r#"<p class="error-code">{}</p>
        <p>{text}</p>
        <p><a href="/">Back to home</a></p>"#,
        status.as_u16()
    );
    (status, Html(layout(title, None, &body))).into_response()
}

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND)
}

/// Panic recovery hook for `CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Handler panicked");
    error_response(StatusCode::INTERNAL_SERVER_ERROR)
}
