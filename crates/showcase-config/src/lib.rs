mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod store_config;
mod submissions_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use store_config::StoreConfig;
pub use submissions_config::SubmissionsConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_LIST_KEY: &str = "showcase:projects";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_TAGS: [&str; 6] = [
    "WHIMSY",
    "BEAUTY",
    "PRODUCTIVITY",
    "PROFIT",
    "VIBES",
    "PERSONAL",
];
