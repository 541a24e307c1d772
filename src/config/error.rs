//! Errors raised while reading or writing `config.yml`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file path not set")]
    FilePathNotSet,

    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Failed to save configuration to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create configuration directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A key parsed but holds a value the application cannot use
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: &'static str, message: String },

    #[error("Failed to serialize configuration: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize configuration: {0}")]
    DeserializationFailed(String),
}
