pub mod app;
pub mod config;
pub mod errors;
pub mod fallback;
pub mod fetch;
pub mod handlers;
pub mod models;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use state::AppState;
