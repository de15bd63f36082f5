//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                     Error Propagation                          │
//! │                                                                │
//! │  serde_json decode error / bad record                          │
//! │       │                                                        │
//! │       ▼                                                        │
//! │  InventoryError::InvalidProductData  (core vocabulary)         │
//! │       │                                                        │
//! │       ▼                                                        │
//! │  StoreError (this module) ← adds file read/write variants      │
//! │       │                                                        │
//! │       ▼                                                        │
//! │  CLI prints the message and continues the menu loop            │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

use stockroom_core::InventoryError;

/// Persistence operation errors.
///
/// Decode failures travel as [`InventoryError::InvalidProductData`] inside
/// the `Inventory` variant; the file variants cover the I/O around the
/// codec and keep the offending path.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A domain error, including every record decode failure.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// The inventory file could not be read.
    #[error("Failed to read inventory file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The inventory file could not be written.
    #[error("Failed to write inventory file {path:?}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The inventory could not be encoded as JSON.
    #[error("Failed to encode inventory as JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates a ReadFile error for the given path.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Creates a WriteFile error for the given path.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::WriteFile {
            path: path.into(),
            source,
        }
    }
}

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;
