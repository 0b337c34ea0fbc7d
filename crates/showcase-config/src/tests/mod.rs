mod submissions;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and point SHOWCASE_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("SHOWCASE_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Clear every override the loader reads, so defaults are observable
pub(crate) fn clear_env_overrides() -> Vec<EnvGuard> {
    [
        "SHOWCASE_SERVER_HOST",
        "SHOWCASE_SERVER_PORT",
        "KV_REST_API_URL",
        "KV_REST_API_TOKEN",
        "SHOWCASE_STORE_KEY",
        "SHOWCASE_ALLOW_DELETE",
        "SHOWCASE_LOG_LEVEL",
        "SHOWCASE_LOG_COLORED",
        "SHOWCASE_LOG_FILE",
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}
