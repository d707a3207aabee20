use std::collections::BTreeSet;

use super::paging::{ViewUpdate, render_next_page};
use super::sort::sort_items;
use crate::state::{BookId, BookItem, CatalogState, Category, SortMode};

/// What: Normalize a raw search input into the form used for matching.
///
/// Inputs:
/// - `raw`: Text as typed by the user
///
/// Output:
/// - Lower-cased term. Only the empty string means "no search"; spaces are matched literally.
#[must_use]
pub fn normalize_term(raw: &str) -> String {
    raw.to_lowercase()
}

/// What: Test whether a book matches a normalized search term.
///
/// Inputs:
/// - `book`: Candidate
/// - `term`: Output of [`normalize_term`]
///
/// Output:
/// - `true` when the term is empty or is a substring of the lower-cased title or author.
#[must_use]
pub fn matches_term(book: &BookItem, term: &str) -> bool {
    term.is_empty()
        || book.title.to_lowercase().contains(term)
        || book.author.to_lowercase().contains(term)
}

/// What: Derive the filtered, sorted view without touching any state.
///
/// Inputs:
/// - `all`: Loaded books in canonical order
/// - `favorites`: Favorite ids
/// - `category`: Active predicate
/// - `term`: Normalized search term
/// - `sort`: Active sort mode
///
/// Output:
/// - A fresh vector; `all` is never reordered.
///
/// Details:
/// - Category first, then the search term, then a stable sort, so equal keys keep
///   canonical order and identical inputs always produce identical output.
#[must_use]
pub fn compute_filtered(
    all: &[BookItem],
    favorites: &BTreeSet<BookId>,
    category: Category,
    term: &str,
    sort: SortMode,
) -> Vec<BookItem> {
    let mut out: Vec<BookItem> = all
        .iter()
        .filter(|b| match category {
            Category::All => true,
            Category::Favorites => favorites.contains(&b.id),
        })
        .filter(|b| matches_term(b, term))
        .cloned()
        .collect();
    sort_items(&mut out, sort);
    out
}

/// What: Recompute the catalog view for a new search term and render the first page.
///
/// Inputs:
/// - `st`: Catalog state; uses `category`, `sort_mode` and `favorites`
/// - `raw_term`: Search input (may be empty)
///
/// Output:
/// - `Some(ViewUpdate)` with `clear = true` once the catalog is ready; `None` while it is
///   loading or after a failed load, in which case only the term is recorded.
///
/// Details:
/// - Resets `rendered_count` before rendering so a stale page set from the previous
///   filter never leaks into the new one.
pub fn apply_filters(st: &mut CatalogState, raw_term: &str) -> Option<ViewUpdate> {
    st.search_term = normalize_term(raw_term);
    st.filtered = compute_filtered(
        &st.all_items,
        &st.favorites,
        st.category,
        &st.search_term,
        st.sort_mode,
    );
    st.rendered_count = 0;
    tracing::debug!(
        term = %st.search_term,
        category = ?st.category,
        sort = ?st.sort_mode,
        matched = st.filtered.len(),
        "[Catalog] filters applied"
    );
    if !st.is_ready() {
        return None;
    }
    let first = render_next_page(st);
    Some(ViewUpdate {
        clear: true,
        page: first.page,
    })
}

/// What: Change the sort mode and recompute the view with the current term.
///
/// Inputs:
/// - `st`: Catalog state
/// - `mode`: New sort mode
///
/// Output:
/// - Same as [`apply_filters`].
pub fn set_sort(st: &mut CatalogState, mode: SortMode) -> Option<ViewUpdate> {
    st.sort_mode = mode;
    let term = st.search_term.clone();
    apply_filters(st, &term)
}

/// What: Change the category predicate and recompute the view with the current term.
///
/// Inputs:
/// - `st`: Catalog state
/// - `category`: New predicate
///
/// Output:
/// - Same as [`apply_filters`].
pub fn set_category(st: &mut CatalogState, category: Category) -> Option<ViewUpdate> {
    st.category = category;
    let term = st.search_term.clone();
    apply_filters(st, &term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::paging::PageRender;
    use crate::state::{CatalogConfig, LoadStatus};

    fn book(id: i64, title: &str, author: &str) -> BookItem {
        BookItem {
            id: BookId(id),
            title: title.into(),
            author: author.into(),
            preview: String::new(),
            image: None,
            emoji: None,
            link: None,
        }
    }

    fn ready_state() -> CatalogState {
        let mut st = CatalogState::new(CatalogConfig::default(), BTreeSet::new());
        st.all_items = vec![
            book(3, "Noli Me Tangere", "Jose Rizal"),
            book(2, "El Filibusterismo", "Jose Rizal"),
            book(1, "Florante at Laura", "Francisco Balagtas"),
        ];
        st.load = LoadStatus::Ready;
        st
    }

    #[test]
    /// What: Search matches title or author case-insensitively
    ///
    /// - Input: "RIZAL", "laura" and padded variants
    /// - Output: Two Rizal books; one Balagtas book matched by title; padding kept
    fn search_matches_title_or_author() {
        let mut st = ready_state();
        apply_filters(&mut st, "RIZAL");
        assert_eq!(st.filtered.len(), 2);
        apply_filters(&mut st, "laura");
        assert_eq!(st.filtered.len(), 1);
        assert_eq!(st.filtered[0].id, BookId(1));
        apply_filters(&mut st, " laura");
        assert_eq!(st.filtered.len(), 1);
        apply_filters(&mut st, "laura ");
        assert!(st.filtered.is_empty());
        apply_filters(&mut st, " ");
        assert_eq!(st.filtered.len(), 3);
        assert_eq!(st.search_term, " ");
    }

    #[test]
    /// What: Filtering never reorders the canonical list
    ///
    /// - Input: Title sort applied
    /// - Output: `all_items` still newest first; `filtered` sorted by title
    fn apply_filters_derives_a_copy() {
        let mut st = ready_state();
        set_sort(&mut st, SortMode::Title);
        let all: Vec<i64> = st.all_items.iter().map(|b| b.id.0).collect();
        assert_eq!(all, vec![3, 2, 1]);
        assert_eq!(st.filtered[0].title, "El Filibusterismo");
    }

    #[test]
    /// What: Recompute clears the previous page set
    ///
    /// - Input: Page size 1, render two pages, then re-filter
    /// - Output: Update has `clear = true` and restarts at index 0
    fn refilter_resets_rendered_count() {
        let mut st = ready_state();
        st.config.page_size = 1;
        apply_filters(&mut st, "");
        crate::logic::render_next_page(&mut st);
        assert_eq!(st.rendered_count, 2);
        let up = apply_filters(&mut st, "").expect("ready");
        assert!(up.clear);
        assert_eq!(
            up.page,
            PageRender::Appended {
                range: 0..1,
                has_more: true
            }
        );
        assert_eq!(st.rendered_count, 1);
    }

    #[test]
    /// What: Operations while loading only record inputs
    ///
    /// - Input: Loading state, apply filters
    /// - Output: `None`, term stored, nothing rendered
    fn apply_filters_is_inert_until_ready() {
        let mut st = ready_state();
        st.load = LoadStatus::Loading;
        assert!(apply_filters(&mut st, "Noli").is_none());
        assert_eq!(st.search_term, "noli");
        assert_eq!(st.rendered_count, 0);
    }

    #[test]
    /// What: Favorites category keeps only favorite ids
    ///
    /// - Input: favorites {2, 99}; category Favorites
    /// - Output: Only id 2 (99 is not loaded)
    fn favorites_category_intersects_loaded_items() {
        let mut st = ready_state();
        st.favorites.insert(BookId(2));
        st.favorites.insert(BookId(99));
        set_category(&mut st, Category::Favorites);
        let ids: Vec<i64> = st.filtered.iter().map(|b| b.id.0).collect();
        assert_eq!(ids, vec![2]);
    }
}
