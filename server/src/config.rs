//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid MONSTER_BACKEND_URL: {0}")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the Monster REST backend, e.g. `http://localhost:8080/api`.
    pub backend_url: Option<String>,
    pub backend_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `MONSTER_BACKEND_URL`: `/api/monsters*` answers 503 when absent
    /// - `MONSTER_BACKEND_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns an error for an unparseable `PORT` or a non-HTTP backend URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let backend_url = lookup("MONSTER_BACKEND_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        if let Some(url) = &backend_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidBackendUrl(url.clone()));
            }
        }

        let backend_timeout_secs = lookup("MONSTER_BACKEND_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_BACKEND_TIMEOUT_SECS);

        Ok(Self { port, backend_url, backend_timeout_secs })
    }
}
