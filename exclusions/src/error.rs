//! Registry error types

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExclusionError {
    #[error("Storage format error in {path}: {source}")]
    StorageFormatError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("File system operation failed: {operation} on {path}")]
    FileSystemError {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },
}

impl ExclusionError {
    pub fn config(field: impl Into<String>) -> Self {
        Self::ConfigurationError { field: field.into() }
    }

    pub fn storage_format(path: &Path, source: serde_json::Error) -> Self {
        Self::StorageFormatError {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn file_system(operation: &str, path: &Path, source: std::io::Error) -> Self {
        Self::FileSystemError {
            operation: operation.to_string(),
            path: path.display().to_string(),
            source,
        }
    }
}

pub type ExclusionResult<T> = Result<T, ExclusionError>;
