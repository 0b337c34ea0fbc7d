use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] showcase_config::ConfigError),

    #[error("Invalid tag in submissions.tags: {0}")]
    Vocabulary(#[from] showcase_core::CoreError),

    #[error("Logging error: {message}")]
    Logging { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
