//! Service-specific tests


/// Common test utilities for services
pub mod common {
    use std::path::PathBuf;
    use tempfile::TempDir;

    use crate::services::JsonRecordStore;

    /// Store pointing at a not-yet-created file inside a fresh temp dir
    pub fn temp_store() -> (JsonRecordStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonRecordStore::new(store_path(&temp_dir));
        (store, temp_dir)
    }

    pub fn store_path(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("exclusion_coins.json")
    }
}
