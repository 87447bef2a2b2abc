//! Cart snapshot persistence.
//!
//! The cart survives restarts through a minimal string key-value interface:
//! one `get`, one `set`, values are opaque strings. [`FileStore`] is the
//! production implementation; [`MemoryStore`] backs tests and ephemeral
//! carts.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A persistent string key-value store.
///
/// Values are opaque strings; callers own the serialization format.
/// Writes replace the previous value wholesale (last-writer-wins).
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
