// src/config.rs
use std::{net::SocketAddr, path::PathBuf};

use thiserror::Error;

use crate::services::persona::DEFAULT_PERSONA;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("failed to read persona file {path:?}: {source}")]
    PersonaFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub persona: String,
    /// When set, a missing key is reported per request instead of at startup.
    pub lazy_credentials: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind_addr", &self.bind_addr)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("lazy_credentials", &self.lazy_credentials)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: ([0, 0, 0, 0], 3000).into(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            persona: DEFAULT_PERSONA.to_string(),
            lazy_credentials: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_raw = get("COACH_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "COACH_BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let lazy_credentials = match get("COACH_LAZY_CREDENTIALS") {
            None => false,
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                name: "COACH_LAZY_CREDENTIALS",
                value: raw,
            })?,
        };

        let persona = match get("COACH_PERSONA_FILE") {
            None => DEFAULT_PERSONA.to_string(),
            Some(path) => {
                let path = PathBuf::from(path);
                std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::PersonaFile { path, source })?
            }
        };

        Ok(Self {
            bind_addr,
            api_key: get("GEMINI_API_KEY"),
            model: get("COACH_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base_url: get("COACH_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            persona,
            lazy_credentials,
        })
    }

    /// Startup check. Only the eager mode refuses to run without a key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_none() && !self.lazy_credentials {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
