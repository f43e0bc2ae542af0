use crate::errors::AppError;
use crate::fetch;
use crate::models::{Gif, Health, MemeResponse, Quote};
use crate::state::AppState;
use crate::ui;
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate, Utc};

pub const VERSION: &str = "1.0.0";

const ROBOTS_TXT: &str = include_str!("../static/robots.txt");
const SITEMAP_XML: &str = include_str!("../static/sitemap.xml");

pub async fn index() -> Html<String> {
    Html(ui::render_index(show_credit_on(Local::now().date_naive())))
}

pub async fn get_quote(State(state): State<AppState>) -> Json<Quote> {
    Json(fetch::fetch_quote(&state).await)
}

pub async fn get_gif(State(state): State<AppState>) -> Json<Gif> {
    Json(fetch::fetch_gif(&state).await)
}

pub async fn get_meme(State(state): State<AppState>) -> Json<MemeResponse> {
    Json(fetch::fetch_meme(&state).await)
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        version: VERSION,
    })
}

pub async fn robots() -> ([(header::HeaderName, &'static str); 1], &'static str) {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], ROBOTS_TXT)
}

pub async fn sitemap() -> ([(header::HeaderName, &'static str); 1], &'static str) {
    ([(header::CONTENT_TYPE, "application/xml")], SITEMAP_XML)
}

pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(ui::render_not_found()))
}

/// Explicit /500 route, kept for uptime probes of the error page.
pub async fn server_error() -> Result<(), AppError> {
    Err(AppError::internal("forced server error"))
}

/// Footer credit appears only strictly after the cutoff date. An
/// unconstructible cutoff counts as "not yet".
fn show_credit_on(today: NaiveDate) -> bool {
    match NaiveDate::from_ymd_opt(2025, 12, 1) {
        Some(cutoff) => today > cutoff,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_hidden_before_cutoff() {
        assert!(!show_credit_on(NaiveDate::from_ymd_opt(2025, 11, 30).unwrap()));
    }

    #[test]
    fn credit_hidden_on_cutoff_day() {
        assert!(!show_credit_on(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()));
    }

    #[test]
    fn credit_shown_after_cutoff() {
        assert!(show_credit_on(NaiveDate::from_ymd_opt(2025, 12, 2).unwrap()));
        assert!(show_credit_on(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()));
    }
}
