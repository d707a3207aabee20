use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError};

/// Key-value store persisted as a single JSON object file.
///
/// Every mutation rewrites the whole file. The entries are tiny, so the
/// simplicity outweighs the cost.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// What: Open the store at `path`, reading any existing entries.
    ///
    /// Inputs:
    /// - `path`: JSON file location; need not exist yet
    ///
    /// Output:
    /// - Store populated from disk, or empty when the file is missing or unreadable.
    ///
    /// Details:
    /// - A corrupt file is logged and ignored; it is overwritten on the next write.
    #[must_use]
    pub fn open(path: &Path) -> Self {
        let entries = match fs::read_to_string(path) {
            Ok(s) => match serde_json::from_str::<BTreeMap<String, String>>(&s) {
                Ok(map) => {
                    tracing::debug!(
                        path = %path.display(),
                        keys = map.len(),
                        "[Storage] Loaded key-value store"
                    );
                    map
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "[Storage] Store file is corrupt; starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "[Storage] Failed to read store file; starting empty"
                );
                BTreeMap::new()
            }
        };
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole map to disk, creating the parent directory when needed.
    fn flush(&self) -> Result<(), StorageError> {
        let body =
            serde_json::to_string_pretty(&self.entries).map_err(|source| StorageError::Serialize {
                context: "key-value store",
                source,
            })?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, body).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::trace!(
            path = %self.path.display(),
            keys = self.entries.len(),
            "[Storage] Store persisted"
        );
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
