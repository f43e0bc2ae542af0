use crate::ui;
use axum::http::StatusCode;
use axum::response::Html;
use tracing::error;

/// Error surfaced to the HTTP layer. Upstream fetch failures never become
/// one of these; they are absorbed by the fallback chain in `fetch`.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // The detail stays in the log; the client only sees the error page.
        error!("request failed: {}", self.message);
        (self.status, Html(ui::render_server_error())).into_response()
    }
}
