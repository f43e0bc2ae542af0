use crate::config::Config;
use std::{sync::Arc, time::Duration};

/// Single fixed timeout applied to every upstream attempt.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }
}
