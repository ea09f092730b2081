//! Test helpers and builder patterns for registry tests

use std::fs;
use std::path::PathBuf;

use exclusions::{ExclusionRegistry, ExclusionResult};
use tempfile::TempDir;

use super::fixtures::TestFixtures;

/// Builder for a registry over a fresh temporary store
pub struct RegistryBuilder {
    temp_dir: TempDir,
    raw_content: Option<String>,
    stable: Vec<String>,
    problematic: Vec<String>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
            raw_content: None,
            stable: Vec::new(),
            problematic: Vec::new(),
        }
    }

    /// Seed the store file with literal content before opening
    pub fn with_file_content(mut self, content: &str) -> Self {
        self.raw_content = Some(content.to_string());
        self
    }

    pub fn with_stable(mut self, symbol: &str) -> Self {
        self.stable.push(symbol.to_string());
        self
    }

    pub fn with_problematic(mut self, symbol: &str) -> Self {
        self.problematic.push(symbol.to_string());
        self
    }

    /// Open the registry; the temp dir must outlive it
    pub fn try_build(self) -> (ExclusionResult<ExclusionRegistry>, TempDir) {
        let path = TestHelpers::store_path(&self.temp_dir);
        if let Some(content) = &self.raw_content {
            fs::write(&path, content).unwrap();
        }

        let registry = ExclusionRegistry::open(&path).and_then(|mut registry| {
            for symbol in &self.stable {
                registry.add_stable_coin(symbol)?;
            }
            for symbol in &self.problematic {
                registry.add_problematic_coin(symbol)?;
            }
            Ok(registry)
        });
        (registry, self.temp_dir)
    }

    pub fn build(self) -> (ExclusionRegistry, TempDir) {
        let (registry, temp_dir) = self.try_build();
        (registry.unwrap(), temp_dir)
    }
}

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    pub fn store_path(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join(TestFixtures::STORE_FILE)
    }

    /// Open a second registry over the same file
    pub fn reopen(registry: &ExclusionRegistry) -> ExclusionRegistry {
        ExclusionRegistry::open(registry.path()).unwrap()
    }

    pub fn assert_lists(registry: &ExclusionRegistry, stable: &[&str], problematic: &[&str]) {
        assert_eq!(registry.stable_coins(), stable, "stable coins differ");
        assert_eq!(registry.problematic_coins(), problematic, "problematic coins differ");
    }
}
