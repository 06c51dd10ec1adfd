//! # Store Error Types
//!
//! Error types for preference-file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path or key as context       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SalesError (caja-sales) ← What the host UI sees                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Host displays user-friendly message                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Preference-file operation errors.
///
/// These errors wrap io/serde errors and carry enough context (path, key)
/// to pinpoint which part of the stored state is affected.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The preference file cannot be read.
    ///
    /// ## When This Occurs
    /// - File permissions issue
    /// - Path points at a directory
    #[error("cannot read preference file {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preference file cannot be written.
    ///
    /// ## When This Occurs
    /// - Disk full
    /// - Parent directory cannot be created
    /// - Rename over the target fails
    #[error("cannot write preference file {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preference file is not a JSON object.
    ///
    /// Unrecoverable at this layer: there is no declared fallback for a
    /// corrupted store, so the error propagates to the caller as-is.
    #[error("preference file {path} is corrupt")]
    MalformedFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A stored value does not decode as its expected type.
    ///
    /// ## When This Occurs
    /// - `productos` holds something other than a product array
    /// - A counter key holds a non-numeric value
    #[error("stored value for key '{key}' is corrupt")]
    MalformedValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value cannot be encoded for storage.
    #[error("cannot encode value for key '{key}'")]
    EncodeFailed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Internal store error.
    #[error("internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a MalformedValue error for a given key.
    pub fn malformed_value(key: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::MalformedValue {
            key: key.into(),
            source,
        }
    }

    /// Creates an EncodeFailed error for a given key.
    pub fn encode_failed(key: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::EncodeFailed {
            key: key.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let bad_json = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = StoreError::malformed_value("productos", bad_json);
        assert_eq!(err.to_string(), "stored value for key 'productos' is corrupt");
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error;

        let bad_json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StoreError::malformed_value("empleados", bad_json);
        assert!(err.source().is_some());
    }
}
