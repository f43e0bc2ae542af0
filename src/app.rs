use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/quote", get(handlers::get_quote))
        .route("/api/gif", get(handlers::get_gif))
        .route("/api/meme", get(handlers::get_meme))
        .route("/api/health", get(handlers::health))
        .route("/robots.txt", get(handlers::robots))
        .route("/sitemap.xml", get(handlers::sitemap))
        .route("/400", get(handlers::not_found))
        .route("/400.html", get(handlers::not_found))
        .route("/500", get(handlers::server_error))
        .route("/500.html", get(handlers::server_error))
        .fallback(handlers::not_found)
        .with_state(state)
}
