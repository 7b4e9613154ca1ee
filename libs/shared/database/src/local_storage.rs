use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use shared_config::AppConfig;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage document is malformed: {0}")]
    Malformed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },
}

impl StorageError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// A durable string-to-string slot, shaped like browser local storage.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the whole value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ==============================================================================
// FILE-BACKED STORE
// ==============================================================================

/// Keeps every key in one JSON object on disk. The file is re-read on each
/// access so it stays the source of truth.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.storage_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Option<Map<String, Value>>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(other) => Err(StorageError::Malformed(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&other)
            ))),
            Err(e) => Err(StorageError::Malformed(e.to_string())),
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        let serialized = serde_json::to_string_pretty(document)?;
        let tmp_path = self.path.with_extension("tmp");

        fs::write(&tmp_path, serialized).map_err(|e| StorageError::io(&tmp_path, e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| StorageError::io(&self.path, e))?;

        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let Some(document) = self.read_document()? else {
            debug!("Storage file {} does not exist yet", self.path.display());
            return Ok(None);
        };

        match document.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(StorageError::Malformed(format!(
                "value under '{}' is a {}, not a string",
                key,
                json_kind(other)
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut document = match self.read_document() {
            Ok(document) => document.unwrap_or_default(),
            Err(StorageError::Malformed(reason)) => {
                warn!(
                    "Replacing malformed storage file {}: {}",
                    self.path.display(),
                    reason
                );
                Map::new()
            }
            Err(e) => return Err(e),
        };

        document.insert(key.to_string(), Value::String(value.to_string()));
        self.write_document(&document)?;

        debug!("Wrote {} bytes under '{}' to {}", value.len(), key, self.path.display());
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ==============================================================================
// IN-MEMORY STORE
// ==============================================================================

/// Volatile store, optionally limited to a byte quota over all keys and values.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            let existing = self.entries.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let needed = self.used_bytes() - existing + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
