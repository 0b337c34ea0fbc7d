use crate::{ConfigError, ConfigErrorResult, DEFAULT_LIST_KEY};

use serde::Deserialize;

/// Connection settings for the external list store.
///
/// The store is a managed Redis-compatible REST endpoint; the handler owns
/// no persisted state itself. Credentials normally arrive via the
/// `KV_REST_API_URL` / `KV_REST_API_TOKEN` environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// REST endpoint base URL
    pub url: String,
    /// Bearer token (never logged)
    pub token: String,
    /// List key holding the submissions
    pub key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            key: String::from(DEFAULT_LIST_KEY),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.url.is_empty() {
            return Err(ConfigError::store(
                "store.url is required (set KV_REST_API_URL or [store] url)",
            ));
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::store(format!(
                "store.url must be an http(s) URL, got {}",
                self.url
            )));
        }

        if self.token.is_empty() {
            return Err(ConfigError::store(
                "store.token is required (set KV_REST_API_TOKEN or [store] token)",
            ));
        }

        if self.key.is_empty() {
            return Err(ConfigError::store("store.key must not be empty"));
        }

        Ok(())
    }
}
