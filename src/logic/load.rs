use std::collections::HashSet;

use super::filter::apply_filters;
use super::paging::ViewUpdate;
use crate::state::{BookItem, CatalogState, LoadStatus, RawBook};

/// What: Normalize raw records into the canonical catalog order.
///
/// Inputs:
/// - `raw`: Records as decoded from the source, in source order
///
/// Output:
/// - Books sorted by id descending (newest first), one per id.
///
/// Details:
/// - Records without a usable id are dropped.
/// - On duplicate ids the first record in source order wins.
/// - Source order is never trusted for the canonical order.
#[must_use]
pub fn normalize_items(raw: Vec<RawBook>) -> Vec<BookItem> {
    let total = raw.len();
    let mut seen = HashSet::with_capacity(total);
    let mut invalid = 0usize;
    let mut duplicates = 0usize;
    let mut items: Vec<BookItem> = Vec::with_capacity(total);
    for r in raw {
        match BookItem::from_raw(r) {
            Some(book) if seen.insert(book.id) => items.push(book),
            Some(book) => {
                duplicates += 1;
                tracing::warn!(id = %book.id, "[Catalog] Dropping duplicate book id");
            }
            None => invalid += 1,
        }
    }
    if invalid > 0 {
        tracing::warn!(invalid, "[Catalog] Dropped records without a usable id");
    }
    items.sort_by(|a, b| b.id.cmp(&a.id));
    tracing::info!(
        total,
        loaded = items.len(),
        invalid,
        duplicates,
        "[Catalog] Catalog normalized"
    );
    items
}

/// What: Install the fetched catalog and compute the initial view.
///
/// Inputs:
/// - `st`: Catalog state (normally still `Loading`)
/// - `raw`: Records from the source
///
/// Output:
/// - The first-page `ViewUpdate`, computed with an empty search term.
pub fn load_items(st: &mut CatalogState, raw: Vec<RawBook>) -> Option<ViewUpdate> {
    load_items_with_term(st, raw, "")
}

/// What: Install the fetched catalog with a search already in effect.
///
/// Inputs:
/// - `st`: Catalog state
/// - `raw`: Records from the source
/// - `search_term`: Term typed while the catalog was loading
///
/// Output:
/// - The first-page `ViewUpdate` of the filtered view; no unfiltered page is produced.
pub fn load_items_with_term(
    st: &mut CatalogState,
    raw: Vec<RawBook>,
    search_term: &str,
) -> Option<ViewUpdate> {
    st.all_items = normalize_items(raw);
    st.load = LoadStatus::Ready;
    apply_filters(st, search_term)
}

/// What: Record a failed catalog fetch.
///
/// Inputs:
/// - `st`: Catalog state
/// - `message`: User-visible error text
///
/// Output:
/// - State is `Failed` with no items; later operations are harmless no-ops on the view.
pub fn load_failed(st: &mut CatalogState, message: impl Into<String>) {
    let message = message.into();
    tracing::error!(error = %message, "[Catalog] Catalog load failed");
    st.all_items.clear();
    st.filtered.clear();
    st.rendered_count = 0;
    st.load = LoadStatus::Failed(message);
}
