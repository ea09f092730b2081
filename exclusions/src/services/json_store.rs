//! JSON file storage for the exclusion record
//!
//! The record is rewritten in full on every save. Writes go to a hidden
//! sibling file which is fsynced and renamed over the target, so a crash never
//! leaves a half-written record behind.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::de::{Error as _, Unexpected};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use shared::registry_debug;

use crate::config::RegistryConfig;
use crate::error::{ExclusionError, ExclusionResult};
use crate::traits::RecordStore;
use crate::types::ExclusionRecord;

/// Record store backed by a single pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonRecordStore {
    path: PathBuf,
}

impl JsonRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new(config.path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory `path` lives in; a bare file name resolves to `.`
    fn parent_dir(path: &Path) -> &Path {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn temp_path(target: &Path) -> PathBuf {
        let file_name = target.file_name().unwrap_or_default().to_string_lossy();
        Self::parent_dir(target).join(format!(".{}.tmp.{}", file_name, std::process::id()))
    }

    /// File the record is actually written to.
    ///
    /// An existing path is canonicalized so a symlinked record is updated
    /// through the link instead of being replaced by a regular file.
    fn write_target(&self) -> ExclusionResult<PathBuf> {
        match fs::canonicalize(&self.path) {
            Ok(target) => Ok(target),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(self.path.clone()),
            Err(e) => Err(ExclusionError::file_system("resolve", &self.path, e)),
        }
    }

    /// Parse the stored text, requiring a top-level JSON object
    fn decode(&self, content: &str) -> ExclusionResult<ExclusionRecord> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| ExclusionError::storage_format(&self.path, e))?;

        if !value.is_object() {
            let source = serde_json::Error::invalid_type(
                unexpected(&value),
                &"an object with stable_coins and problematic_coins",
            );
            return Err(ExclusionError::storage_format(&self.path, source));
        }

        serde_json::from_value(value).map_err(|e| ExclusionError::storage_format(&self.path, e))
    }

    /// Serialize with four-space indentation and a trailing newline
    fn encode(record: &ExclusionRecord) -> ExclusionResult<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        record.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(buf)
    }

    fn atomic_write(&self, content: &[u8]) -> ExclusionResult<()> {
        let parent = Self::parent_dir(&self.path);
        fs::create_dir_all(parent)
            .map_err(|e| ExclusionError::file_system("create directory", parent, e))?;

        let target = self.write_target()?;
        let target_dir = Self::parent_dir(&target);
        let temp_path = Self::temp_path(&target);
        let written = fs::File::create(&temp_path).and_then(|mut file| {
            file.write_all(content)?;
            file.sync_all()
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(ExclusionError::file_system("write", &temp_path, e));
        }

        if let Err(e) = fs::rename(&temp_path, &target) {
            let _ = fs::remove_file(&temp_path);
            return Err(ExclusionError::file_system("rename", &target, e));
        }

        // Make the rename itself durable
        if let Ok(dir) = fs::File::open(target_dir) {
            let _ = dir.sync_all();
        }

        Ok(())
    }
}

/// Describe a JSON value for a type mismatch error
fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

impl RecordStore for JsonRecordStore {
    fn load(&self) -> ExclusionResult<ExclusionRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                registry_debug!(self.path.display(), "📭 No exclusion file yet, starting empty");
                return Ok(ExclusionRecord::default());
            }
            Err(e) => return Err(ExclusionError::file_system("read", &self.path, e)),
        };

        let record = self.decode(&content)?;

        registry_debug!(
            self.path.display(),
            "📂 Loaded {} stable and {} problematic coins",
            record.stable_coins.len(),
            record.problematic_coins.len()
        );
        Ok(record)
    }

    fn save(&self, record: &ExclusionRecord) -> ExclusionResult<()> {
        let content = Self::encode(record)?;
        self.atomic_write(&content)?;

        registry_debug!(
            self.path.display(),
            "💾 Saved {} stable and {} problematic coins",
            record.stable_coins.len(),
            record.problematic_coins.len()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
