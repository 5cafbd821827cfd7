use crate::domain::model::LoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP client error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Feed load failed: {0}")]
    LoadError(#[from] LoadError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl FeedError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FeedError::LoadError(LoadError::Connectivity) | FeedError::ApiError(_) => {
                "Check your network connection and that the feed URL is reachable"
            }
            FeedError::LoadError(LoadError::InvalidData) => {
                "Make sure the URL points to a feed that returns {\"items\": [...]}"
            }
            FeedError::IoError(_) => "Check that the configuration file exists and is readable",
            FeedError::SerializationError(_) => "Retry with text output",
            FeedError::TomlError(_)
            | FeedError::UrlError(_)
            | FeedError::ConfigError { .. }
            | FeedError::InvalidConfigValueError { .. }
            | FeedError::MissingConfigError { .. } => {
                "Fix the configuration and run the command again"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            FeedError::LoadError(LoadError::Connectivity) => 2,
            FeedError::LoadError(LoadError::InvalidData) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
