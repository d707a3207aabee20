//! Non-interactive `--list` and `--export-html` commands.

use std::collections::BTreeSet;
use std::path::Path;

use crate::logic::{ViewUpdate, apply_filters, load_items, set_category};
use crate::render::{HtmlSurface, present};
use crate::sources::fetch_catalog;
use crate::state::{BookId, CatalogState, Category, RawBook};
use crate::storage::{FileStore, load_favorites};
use crate::theme::{Settings, storage_path};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Build a ready catalog state and its first-page update from fetched records.
///
/// Inputs:
/// - `settings`: Effective settings (page size, sort)
/// - `favorites`: Stored favorites
/// - `records`: Fetched catalog records
/// - `search`: Optional search term
/// - `favorites_only`: Restrict to favorites
///
/// Output:
/// - The state and the update describing its first page.
#[must_use]
pub fn prepare_view(
    settings: &Settings,
    favorites: BTreeSet<BookId>,
    records: Vec<RawBook>,
    search: Option<&str>,
    favorites_only: bool,
) -> (CatalogState, Option<ViewUpdate>) {
    let mut st = CatalogState::new(settings.catalog_config(), favorites);
    st.sort_mode = settings.sort_mode;
    let mut update = load_items(&mut st, records);
    if favorites_only {
        update = set_category(&mut st, Category::Favorites);
    }
    if let Some(term) = search {
        update = apply_filters(&mut st, term);
    }
    (st, update)
}

/// What: Render the currently paged books as plain text lines.
///
/// Inputs:
/// - `st`: Ready catalog state
///
/// Output:
/// - One line per rendered book, plus a trailer when more pages exist.
#[must_use]
pub fn format_listing(st: &CatalogState) -> Vec<String> {
    if st.filtered.is_empty() {
        return vec!["No books match.".to_string()];
    }
    let mut lines: Vec<String> = st
        .rendered()
        .iter()
        .map(|b| {
            let heart = if st.is_favorite(b.id) { '♥' } else { ' ' };
            if b.author.is_empty() {
                format!("{heart} {:>6}  {}", b.id.0, b.title)
            } else {
                format!("{heart} {:>6}  {} by {}", b.id.0, b.title, b.author)
            }
        })
        .collect();
    if st.has_more() {
        lines.push(format!(
            "… {} more (raise --page-size to see them)",
            st.filtered.len() - st.rendered_count
        ));
    }
    lines
}

/// What: Render the first page of `st` as a standalone HTML document.
///
/// Inputs:
/// - `st`: Catalog state
/// - `update`: Its first-page update
///
/// Output:
/// - Escaped HTML document text.
#[must_use]
pub fn export_document(st: &CatalogState, update: Option<&ViewUpdate>) -> String {
    let mut surface = HtmlSurface::new();
    if let Some(update) = update {
        present(&mut surface, st, update);
    }
    surface.document("Aklatell")
}

async fn fetch_view(
    settings: &Settings,
    search: Option<&str>,
    favorites_only: bool,
) -> Result<(CatalogState, Option<ViewUpdate>)> {
    let records = fetch_catalog(&settings.catalog_source, settings.fetch_timeout).await?;
    let mut store = FileStore::open(&storage_path());
    let favorites = load_favorites(&mut store, &settings.favorites_key);
    Ok(prepare_view(settings, favorites, records, search, favorites_only))
}

/// What: Fetch the catalog and print its first page.
///
/// # Errors
/// - Returns the fetch error when the catalog cannot be loaded.
pub async fn run_list(settings: &Settings, search: Option<&str>, favorites_only: bool) -> Result<()> {
    let (st, _) = fetch_view(settings, search, favorites_only).await?;
    for line in format_listing(&st) {
        println!("{line}");
    }
    Ok(())
}

/// What: Fetch the catalog and write its first page as HTML to `path`.
///
/// # Errors
/// - Returns the fetch error, or an IO error when `path` cannot be written.
pub async fn run_export(
    settings: &Settings,
    search: Option<&str>,
    favorites_only: bool,
    path: &Path,
) -> Result<()> {
    let (st, update) = fetch_view(settings, search, favorites_only).await?;
    let doc = export_document(&st, update.as_ref());
    tokio::fs::write(path, doc).await?;
    tracing::info!(path = %path.display(), rendered = st.rendered_count, "[Export] HTML written");
    println!("Wrote {} books to {}", st.rendered_count, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<RawBook> {
        serde_json::from_str(
            r#"[{"id":1,"title":"Alpha","author":"Zed"},
                {"id":2,"title":"<b>Beta</b>","author":"Amy"},
                {"id":3,"title":"Gamma"}]"#,
        )
        .expect("valid json")
    }

    #[test]
    /// What: Listing pages and marks favorites
    ///
    /// - Input: 3 books, page size 2, favorite 3
    /// - Output: Gamma (favorite) and Beta, then a "1 more" trailer
    fn listing_pages_and_marks_favorites() {
        let settings = Settings {
            page_size: 2,
            ..Settings::default()
        };
        let (st, _) = prepare_view(&settings, BTreeSet::from([BookId(3)]), records(), None, false);
        let lines = format_listing(&st);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('♥'));
        assert!(lines[0].ends_with("Gamma"));
        assert!(lines[1].contains("by Amy"));
        assert!(lines[2].contains("1 more"));
    }

    #[test]
    /// What: Favorites-only with a search term narrows both ways
    ///
    /// - Input: Favorites {1, 2}, search "zed"
    /// - Output: Only Alpha
    fn favorites_only_with_search() {
        let (st, _) = prepare_view(
            &Settings::default(),
            BTreeSet::from([BookId(1), BookId(2)]),
            records(),
            Some("zed"),
            true,
        );
        let ids: Vec<BookId> = st.rendered().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![BookId(1)]);
    }

    #[test]
    /// What: Exported HTML escapes titles
    ///
    /// - Input: Title with markup
    /// - Output: Escaped entity text, no raw tag
    fn export_escapes_titles() {
        let (st, update) = prepare_view(&Settings::default(), BTreeSet::new(), records(), None, false);
        let doc = export_document(&st, update.as_ref());
        assert!(doc.contains("&lt;b&gt;Beta&lt;/b&gt;"));
        assert!(!doc.contains("<b>Beta"));
    }

    #[test]
    /// What: Empty result lists a message
    ///
    /// - Input: Search with no matches
    /// - Output: Single "No books match." line
    fn listing_empty() {
        let (st, _) = prepare_view(&Settings::default(), BTreeSet::new(), records(), Some("zzz"), false);
        assert_eq!(format_listing(&st), vec!["No books match.".to_string()]);
    }
}
