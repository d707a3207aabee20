use std::collections::BTreeSet;

use super::{KeyValueStore, StorageError};
use crate::state::{BookId, RawId};

/// What: Read the favorites set stored under `key`.
///
/// Inputs:
/// - `store`: Key-value store
/// - `key`: Favorites key (e.g. `aklatell_favorites`)
///
/// Output:
/// - The stored ids, de-duplicated. Absent data yields an empty set.
///
/// Details:
/// - The stored value must be a JSON array of ids (numbers or numeric strings).
/// - Anything else is corrupt: it is logged, removed from the store so the error does
///   not repeat on every start, and treated as empty.
pub fn load_favorites(store: &mut dyn KeyValueStore, key: &str) -> BTreeSet<BookId> {
    let Some(raw) = store.get(key) else {
        return BTreeSet::new();
    };
    let parsed = serde_json::from_str::<Vec<RawId>>(&raw)
        .map_err(|e| e.to_string())
        .and_then(|ids| {
            ids.iter()
                .map(|id| id.normalize().ok_or_else(|| format!("invalid id {id:?}")))
                .collect::<Result<BTreeSet<BookId>, String>>()
        });
    match parsed {
        Ok(set) => {
            tracing::debug!(key, count = set.len(), "[Favorites] Loaded favorites");
            set
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "[Favorites] Discarding corrupt favorites data");
            if let Err(err) = store.remove(key) {
                tracing::warn!(key, error = %err, "[Favorites] Failed to clear corrupt favorites");
            }
            BTreeSet::new()
        }
    }
}

/// What: Persist the favorites set under `key` as a JSON array.
///
/// Inputs:
/// - `store`: Key-value store
/// - `key`: Favorites key
/// - `favorites`: Current set
///
/// Output:
/// - `Ok(())` once the store accepted the value.
///
/// # Errors
/// - Returns `StorageError` when serialization or the backend write fails.
pub fn save_favorites(
    store: &mut dyn KeyValueStore,
    key: &str,
    favorites: &BTreeSet<BookId>,
) -> Result<(), StorageError> {
    let body = serde_json::to_string(favorites).map_err(|source| StorageError::Serialize {
        context: "favorites",
        source,
    })?;
    store.set(key, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    /// What: Favorites round-trip through the store
    ///
    /// - Input: Save {3, 1}
    /// - Output: Stored as `[1,3]`; loads back as the same set
    fn favorites_save_then_load() {
        let mut store = MemoryStore::new();
        let set: BTreeSet<BookId> = [BookId(3), BookId(1)].into_iter().collect();
        save_favorites(&mut store, "favs", &set).expect("save");
        assert_eq!(store.get("favs").as_deref(), Some("[1,3]"));
        assert_eq!(load_favorites(&mut store, "favs"), set);
    }

    #[test]
    /// What: Legacy data with string ids and duplicates is accepted
    ///
    /// - Input: `["2", 2, 5]`
    /// - Output: {2, 5}
    fn favorites_accept_mixed_id_types() {
        let mut store = MemoryStore::new();
        store.set("favs", r#"["2", 2, 5]"#).expect("set");
        let set = load_favorites(&mut store, "favs");
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![BookId(2), BookId(5)]);
    }

    #[test]
    /// What: Corrupt favorites are discarded and removed
    ///
    /// - Input: `{"oops": true}` and `["x"]`
    /// - Output: Empty set each time; key removed from the store
    fn corrupt_favorites_are_cleared() {
        for bad in [r#"{"oops": true}"#, r#"["x"]"#] {
            let mut store = MemoryStore::new();
            store.set("favs", bad).expect("set");
            assert!(load_favorites(&mut store, "favs").is_empty());
            assert_eq!(store.get("favs"), None);
        }
    }
}
