//! Local key-value persistence.
//!
//! The catalog keeps a handful of small scalar entries (favorites, theme,
//! reader preferences, reading progress). They all go through the
//! [`KeyValueStore`] trait so the controller can be exercised against the
//! in-memory store in tests and against a JSON file on disk at runtime.

use std::path::PathBuf;

use thiserror::Error;

pub mod favorites;
pub mod file;
pub mod memory;
pub mod preferences;
pub mod reader;

pub use favorites::{load_favorites, save_favorites};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use preferences::{ThemePreference, load_theme_preference, save_theme_preference};
pub use reader::{FontSize, ReaderFont, ReaderPrefs, ReaderTheme, ReadingProgress};

/// Failures writing to a [`KeyValueStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be written.
    #[error("storage write failed at {path}: {source}")]
    Io {
        /// Backing file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// A value could not be serialized.
    #[error("storage serialization failed for {context}: {source}")]
    Serialize {
        /// What was being serialized.
        context: &'static str,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

/// Minimal string-to-string store modelled on browser local storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// - Returns `StorageError` when the backend cannot persist the change.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    /// - Returns `StorageError` when the backend cannot persist the change.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
