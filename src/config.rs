use std::env;

/// Sentinel value shipped in example configs; treated the same as no key.
pub const GIPHY_KEY_PLACEHOLDER: &str = "YOUR_GIPHY_API_KEY_HERE";

pub const QUOTE_PRIMARY_URL: &str = "https://api.quotable.io/random";
pub const QUOTE_BACKUP_URL: &str = "https://zenquotes.io/api/random";
pub const GIPHY_URL: &str = "https://api.giphy.com/v1/gifs/random";
pub const MEME_URL: &str = "https://meme-api.com/gimme/wholesomememes";

/// Immutable application configuration, built once at startup from the
/// environment and shared read-only with every handler.
#[derive(Debug, Clone)]
pub struct Config {
    /// Giphy API key; `None` disables the Giphy upstream entirely.
    pub giphy_api_key: Option<String>,
    pub quote_primary_url: String,
    pub quote_backup_url: String,
    pub giphy_url: String,
    pub meme_url: String,
    pub port: u16,
    /// Log each fetch result at info level when set (APP_ENV=development).
    pub verbose: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            giphy_api_key: sanitize_key(env::var("GIPHY_API_KEY").ok()),
            quote_primary_url: url_from_env("QUOTE_PRIMARY_URL", QUOTE_PRIMARY_URL),
            quote_backup_url: url_from_env("QUOTE_BACKUP_URL", QUOTE_BACKUP_URL),
            giphy_url: url_from_env("GIPHY_URL", GIPHY_URL),
            meme_url: url_from_env("MEME_URL", MEME_URL),
            port: parse_port(env::var("PORT").ok()),
            verbose: env::var("APP_ENV").is_ok_and(|value| value == "development"),
        }
    }
}

fn sanitize_key(key: Option<String>) -> Option<String> {
    key.filter(|key| !key.is_empty() && key != GIPHY_KEY_PLACEHOLDER)
}

fn parse_port(value: Option<String>) -> u16 {
    value
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(5000)
}

fn url_from_env(name: &str, default: &str) -> String {
    url_or_default(env::var(name).ok(), default)
}

fn url_or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
