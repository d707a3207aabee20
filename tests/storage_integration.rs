//! Favorites and theme persistence through the file-backed store.

use std::collections::BTreeSet;

use aklatell::state::{AppState, BookId, RawBook};
use aklatell::storage::{
    FileStore, KeyValueStore, ThemePreference, load_favorites, load_theme_preference,
    save_favorites,
};
use aklatell::theme::Settings;

fn records() -> Vec<RawBook> {
    serde_json::from_str(r#"[{"id":1,"title":"Alpha"},{"id":2,"title":"Beta"}]"#)
        .expect("valid json")
}

#[test]
/// What: Favorites and theme survive reopening the store file
///
/// - Input: Toggle a favorite and the theme in one app instance, reopen the file
/// - Output: Second instance starts with the favorite and dark theme
fn favorites_and_theme_survive_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");
    let settings = Settings::default();

    let mut first = AppState::new(&settings, Box::new(FileStore::open(&path)));
    first.finish_load(Ok(records()));
    first.toggle_selected_favorite();
    first.toggle_theme();
    drop(first);

    let second = AppState::new(&settings, Box::new(FileStore::open(&path)));
    assert!(second.catalog.is_favorite(BookId(2)));
    assert_eq!(second.catalog.favorite_count(), 1);
    assert_eq!(second.theme_pref, ThemePreference::Dark);
}

#[test]
/// What: Corrupt favorites are discarded without affecting other keys
///
/// - Input: Store file whose favorites value is not a JSON array
/// - Output: Empty favorites, key removed on disk, theme still read
fn corrupt_favorites_are_discarded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");
    std::fs::write(
        &path,
        r#"{"aklatell_favorites": "{not json", "aklatell_theme": "dark"}"#,
    )
    .expect("write");

    let mut store = FileStore::open(&path);
    assert!(load_favorites(&mut store, "aklatell_favorites").is_empty());
    assert_eq!(
        load_theme_preference(&store, "aklatell_theme"),
        ThemePreference::Dark
    );

    let reopened = FileStore::open(&path);
    assert!(reopened.get("aklatell_favorites").is_none());
    assert_eq!(reopened.get("aklatell_theme").as_deref(), Some("dark"));
}

#[test]
/// What: Separate keys keep separate favorite sets in one file
///
/// - Input: Two catalogs configured with different favorites keys
/// - Output: Each key round-trips its own set
fn instances_are_isolated_by_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");
    let mut store = FileStore::open(&path);
    save_favorites(&mut store, "novels_favorites", &BTreeSet::from([BookId(7)]))
        .expect("save novels");
    save_favorites(&mut store, "poems_favorites", &BTreeSet::from([BookId(1), BookId(3)]))
        .expect("save poems");

    let mut reopened = FileStore::open(&path);
    assert_eq!(
        load_favorites(&mut reopened, "novels_favorites"),
        BTreeSet::from([BookId(7)])
    );
    assert_eq!(
        load_favorites(&mut reopened, "poems_favorites"),
        BTreeSet::from([BookId(1), BookId(3)])
    );
}

#[test]
/// What: A missing or unreadable store file starts empty
///
/// - Input: Path that does not exist; a file holding invalid JSON
/// - Output: No entries; first write replaces the corrupt file
fn missing_or_corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = FileStore::open(&dir.path().join("nope").join("storage.json"));
    assert!(missing.get("anything").is_none());

    let path = dir.path().join("storage.json");
    std::fs::write(&path, "][").expect("write");
    let mut store = FileStore::open(&path);
    assert!(store.get("aklatell_theme").is_none());
    store.set("aklatell_theme", "light").expect("write over corrupt file");
    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.contains("\"aklatell_theme\""));
}
