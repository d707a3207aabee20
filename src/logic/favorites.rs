use super::filter::apply_filters;
use super::paging::ViewUpdate;
use crate::state::{BookId, CatalogState, Category};
use crate::storage::{KeyValueStore, save_favorites};

/// Result of toggling one favorite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoriteToggle {
    /// Book whose membership flipped.
    pub id: BookId,
    /// Membership after the toggle.
    pub is_favorite: bool,
    /// Recomputed view when the favorites-only predicate is active.
    pub refiltered: Option<ViewUpdate>,
}

/// What: Flip `id` in the favorites set, persist it, and refresh the favorites view.
///
/// Inputs:
/// - `st`: Catalog state
/// - `store`: Key-value store receiving the updated set under `config.favorites_key`
/// - `id`: Book id to toggle
///
/// Output:
/// - `FavoriteToggle` telling the caller which affordances to update and, in
///   favorites-only mode, the recomputed view.
///
/// Details:
/// - A failed write is logged; the in-memory set still changes so the UI stays consistent.
/// - The search term is preserved when re-filtering.
pub fn toggle_favorite(
    st: &mut CatalogState,
    store: &mut dyn KeyValueStore,
    id: BookId,
) -> FavoriteToggle {
    let is_favorite = if st.favorites.remove(&id) {
        false
    } else {
        st.favorites.insert(id);
        true
    };
    if let Err(e) = save_favorites(store, &st.config.favorites_key, &st.favorites) {
        tracing::warn!(error = %e, id = %id, "[Favorites] Failed to persist favorites");
    }
    tracing::debug!(
        id = %id,
        is_favorite,
        count = st.favorites.len(),
        "[Favorites] Toggled"
    );
    let refiltered = if st.category == Category::Favorites {
        let term = st.search_term.clone();
        apply_filters(st, &term)
    } else {
        None
    };
    FavoriteToggle {
        id,
        is_favorite,
        refiltered,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::logic::paging::PageRender;
    use crate::state::{BookItem, CatalogConfig, LoadStatus};
    use crate::storage::{MemoryStore, load_favorites};

    fn ready_state() -> CatalogState {
        let mut st = CatalogState::new(CatalogConfig::default(), BTreeSet::new());
        st.all_items = (1..=3)
            .rev()
            .map(|i| BookItem {
                id: BookId(i),
                title: format!("Book {i}"),
                author: "Anon".into(),
                preview: String::new(),
                image: None,
                emoji: None,
                link: None,
            })
            .collect();
        st.load = LoadStatus::Ready;
        st
    }

    #[test]
    /// What: Toggle persists and is its own inverse
    ///
    /// - Input: Toggle id 2 twice
    /// - Output: Stored set {2} after first toggle, empty after second
    fn toggle_twice_restores_set() {
        let mut st = ready_state();
        let mut store = MemoryStore::new();
        let first = toggle_favorite(&mut st, &mut store, BookId(2));
        assert!(first.is_favorite);
        assert!(first.refiltered.is_none());
        assert_eq!(load_favorites(&mut store, "aklatell_favorites").len(), 1);
        let second = toggle_favorite(&mut st, &mut store, BookId(2));
        assert!(!second.is_favorite);
        assert!(st.favorites.is_empty());
        assert!(load_favorites(&mut store, "aklatell_favorites").is_empty());
    }

    #[test]
    /// What: Un-favoriting in favorites-only mode drops the item immediately
    ///
    /// - Input: favorites {1}, category Favorites, toggle 1
    /// - Output: Refiltered update clears the view into the no-results state
    fn unfavorite_in_favorites_view_refilters() {
        let mut st = ready_state();
        let mut store = MemoryStore::new();
        toggle_favorite(&mut st, &mut store, BookId(1));
        crate::logic::set_category(&mut st, Category::Favorites);
        assert_eq!(st.filtered.len(), 1);
        let out = toggle_favorite(&mut st, &mut store, BookId(1));
        let up = out.refiltered.expect("refiltered in favorites mode");
        assert!(up.clear);
        assert_eq!(up.page, PageRender::NoResults);
        assert!(st.filtered.is_empty());
    }
}
