use std::path::PathBuf;

use thiserror::Error;

/// Main application error type covering every fatal failure mode of a run
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("request failed: {request} - {source}")]
    Transport {
        request: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP status error: {status} for {request}")]
    HttpStatus { request: String, status: u16 },

    #[error("cannot read {path}: {source}")]
    UnreadableTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid validator endpoint: {url} - {details}")]
    InvalidEndpoint { url: String, details: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ValidationError {
    /// True for failures of the HTTP submission itself.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            ValidationError::Transport { .. }
                | ValidationError::HttpStatus { .. }
                | ValidationError::UnreadableTarget { .. }
        )
    }
}

/// Configuration-specific error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Unsupported configuration file format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
