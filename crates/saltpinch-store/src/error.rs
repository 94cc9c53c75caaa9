//! Error types for the record store
//!
//! Covers layer file I/O, layer decoding and load order parsing.

use saltpinch_record::KeyError;
use std::path::PathBuf;

/// Errors loading or saving layers
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error reading or writing a file
    #[error("io error on {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Layer file is not a valid layer document
    #[error("malformed layer file {path}: {source}")]
    Malformed {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Layer serialization failed
    #[error("failed to encode layer {mod_key}: {source}")]
    Encode {
        /// Layer being written
        mod_key: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Load order line is not a plugin file name
    #[error("load order line {line}: {source}")]
    LoadOrderEntry {
        /// 1-based line number
        line: usize,
        /// Parse failure
        #[source]
        source: KeyError,
    },
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create malformed-layer error for path
    pub fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }
}
