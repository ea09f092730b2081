//! Registry configuration

use std::path::{Path, PathBuf};

use crate::error::{ExclusionError, ExclusionResult};

/// Storage location used when no override is given
pub const DEFAULT_EXCLUSION_PATH: &str = "GeneralUtils/exclusion_coins.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// JSON file holding the exclusion record
    pub path: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_EXCLUSION_PATH),
        }
    }
}

impl RegistryConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Override the storage path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reject paths that can never hold the record file
    pub fn validate(&self) -> ExclusionResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ExclusionError::config("storage path is empty"));
        }
        if self.path.is_dir() {
            return Err(ExclusionError::config(format!(
                "storage path {} is a directory",
                self.path.display()
            )));
        }
        Ok(())
    }
}
