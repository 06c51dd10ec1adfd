//! # Preference File
//!
//! The single named file backing all persisted state.
//!
//! ## Load/Flush Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Preference File Lifecycle                          │
//! │                                                                         │
//! │  Store::open(config)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PrefsFile::open(path) ← Parse the whole file into a key→value map     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │  Map<String, Value>                     │                           │
//! │  │  "productos"          → [ {...}, ... ]  │                           │
//! │  │  "empleados"          → [ {...}, ... ]  │                           │
//! │  │  "documentos"         → [ {...}, ... ]  │                           │
//! │  │  "ventas_diarias"     → 8450.0          │                           │
//! │  │  ...                                    │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ put(key, value) ──► mutate map ──► flush()                     │
//! │       ▼                                                                 │
//! │  write caja-prefs.json.tmp, rename over caja-prefs.json                │
//! │  (readers never observe a half-written store)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## In-Memory Mode
//! A `PrefsFile` without a path keeps the map but skips every flush. Tests
//! get full store behavior with zero filesystem traffic.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// The preference file: a JSON object of fixed keys, held in memory and
/// rewritten whole on every change.
#[derive(Debug)]
pub struct PrefsFile {
    /// Backing file. `None` means in-memory mode.
    path: Option<PathBuf>,

    /// Current key→value map, insertion-ordered like the file on disk.
    entries: Map<String, Value>,
}

impl PrefsFile {
    /// Opens the preference file at `path`, creating parent directories.
    ///
    /// A missing file yields an empty map; the file itself appears on the
    /// first flush. A present-but-unparseable file is an error: there is no
    /// declared recovery path for a corrupt store.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed {
                    path: path.clone(),
                    source: e,
                })?;
            }
        }

        let entries = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|e| StoreError::ReadFailed {
                path: path.clone(),
                source: e,
            })?;

            if text.trim().is_empty() {
                Map::new()
            } else {
                serde_json::from_str(&text).map_err(|e| StoreError::MalformedFile {
                    path: path.clone(),
                    source: e,
                })?
            }
        } else {
            Map::new()
        };

        debug!(
            path = %path.display(),
            keys = entries.len(),
            "Loaded preference file"
        );

        Ok(PrefsFile {
            path: Some(path),
            entries,
        })
    }

    /// Creates an empty in-memory preference map (for testing).
    pub fn in_memory() -> Self {
        PrefsFile {
            path: None,
            entries: Map::new(),
        }
    }

    /// Returns the backing file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Checks whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the store holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decodes the value stored under `key`.
    ///
    /// ## Returns
    /// * `Ok(Some(T))` - Key present and well-formed
    /// * `Ok(None)` - Key absent
    /// * `Err(MalformedValue)` - Key present but does not decode as `T`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| StoreError::malformed_value(key, e)),
        }
    }

    /// Encodes `value` under `key` and flushes the whole map to disk.
    pub fn put<T: Serialize>(&mut self, key: &str, value: &T) -> StoreResult<()> {
        let value = serde_json::to_value(value).map_err(|e| StoreError::encode_failed(key, e))?;
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    /// Erases every key and flushes the now-empty map.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.entries.clear();
        self.flush()
    }

    /// Rewrites the backing file from the in-memory map.
    ///
    /// Writes a sibling `.tmp` file first and renames it over the target,
    /// so a crash mid-write leaves the previous file intact.
    fn flush(&self) -> StoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let text = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StoreError::Internal(format!("serializing preference map: {e}")))?;

        let mut tmp_os = path.as_os_str().to_owned();
        tmp_os.push(".tmp");
        let tmp = PathBuf::from(tmp_os);

        fs::write(&tmp, text).map_err(|e| StoreError::WriteFailed {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, path).map_err(|e| StoreError::WriteFailed {
            path: path.clone(),
            source: e,
        })?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
