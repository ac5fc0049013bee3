use std::io;
use std::path::PathBuf;

/// Errors that can occur while generating interfaces
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error in {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot resolve import \"{import}\" from {from}")]
    UnresolvedImport { import: String, from: PathBuf },

    #[error("Inheritance cycle through {0}")]
    InheritanceCycle(PathBuf),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for interface generation
pub type Result<T> = std::result::Result<T, Error>;
