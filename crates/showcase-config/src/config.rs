use crate::{
    ConfigError, ConfigErrorResult, LoggingConfig, ServerConfig, StoreConfig, SubmissionsConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub submissions: SubmissionsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for SHOWCASE_CONFIG_DIR env var, else use ./.showcase/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SHOWCASE_CONFIG_DIR env var > ./.showcase/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("SHOWCASE_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".showcase"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.store.validate()?;
        self.submissions.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  store: {} (key: {}, token: {})",
            self.store.url,
            self.store.key,
            if self.store.token.is_empty() {
                "unset"
            } else {
                "set"
            }
        );
        info!(
            "  submissions: delete {}, tags [{}]",
            if self.submissions.allow_delete {
                "enabled"
            } else {
                "disabled"
            },
            self.submissions.tags.join(", ")
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SHOWCASE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SHOWCASE_SERVER_PORT", &mut self.server.port);

        // Store - the credential variable names come from the hosting
        // platform and arrive with stray whitespace often enough that both
        // are trimmed before use.
        Self::apply_env_trimmed("KV_REST_API_URL", &mut self.store.url);
        Self::apply_env_trimmed("KV_REST_API_TOKEN", &mut self.store.token);
        Self::apply_env_string("SHOWCASE_STORE_KEY", &mut self.store.key);

        // Submissions
        Self::apply_env_bool(
            "SHOWCASE_ALLOW_DELETE",
            &mut self.submissions.allow_delete,
        );

        // Logging
        Self::apply_env_parse("SHOWCASE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SHOWCASE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SHOWCASE_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override, trimming surrounding whitespace
    fn apply_env_trimmed(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val.trim().to_string();
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
