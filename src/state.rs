// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::coach::Coach;
use crate::services::gemini::GeminiClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// `None` when no credential is configured; chat requests then fail with a 500.
    pub coach: Option<Coach>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let coach = config.api_key.as_ref().map(|key| {
            let client = GeminiClient::new(&config.api_base_url, key, &config.model);
            Coach::new(client, &config.persona)
        });
        Self { coach }
    }

    pub fn shared(config: &Config) -> SharedState {
        Arc::new(Self::new(config))
    }
}
