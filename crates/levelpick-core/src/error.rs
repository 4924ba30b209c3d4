//! Library error types

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Core error type
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Directory could not be listed
    #[error("failed to list {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Game file could not be removed
    #[error("failed to delete {path}: {source}")]
    RemoveFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config value out of range
    #[error("invalid config: {0}")]
    Config(String),

    /// Config file is not valid TOML
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
