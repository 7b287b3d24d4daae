use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarmError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Export error: could not write {}: {}", .path.display(), .source)]
    ExportError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<config::ConfigError> for FarmError {
    fn from(err: config::ConfigError) -> Self {
        FarmError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for FarmError {
    fn from(err: serde_json::Error) -> Self {
        FarmError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FarmError>;
