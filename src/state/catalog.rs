//! The catalog list controller state.
//!
//! One [`CatalogState`] owns everything the catalog view derives from: the
//! loaded books, the favorites set, the active predicate/search/sort and the
//! incremental rendering cursor. Operations that mutate it live in
//! [`crate::logic`].

use std::collections::BTreeSet;

use super::types::{BookId, BookItem, Category, LoadStatus, SortMode};

/// Default number of cards appended per page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Default storage key for the serialized favorites list.
pub const DEFAULT_FAVORITES_KEY: &str = "aklatell_favorites";

/// Default storage key for the light/dark preference.
pub const DEFAULT_THEME_KEY: &str = "aklatell_theme";

/// Parameters that distinguish one catalog instance from another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Cards appended per `render_next_page` call. Always at least 1.
    pub page_size: usize,
    /// Storage key holding the favorites JSON array.
    pub favorites_key: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
        }
    }
}

/// Owned state of the catalog list controller.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    /// Instance parameters.
    pub config: CatalogConfig,
    /// Loaded books in canonical order (newest first). Never mutated after load.
    pub all_items: Vec<BookItem>,
    /// Favorite book ids.
    pub favorites: BTreeSet<BookId>,
    /// Active category predicate.
    pub category: Category,
    /// Search term the current view was computed with (lower-cased, trimmed).
    pub search_term: String,
    /// Active sort mode.
    pub sort_mode: SortMode,
    /// Derived view; rebuilt from `all_items` on every filter change.
    pub filtered: Vec<BookItem>,
    /// Number of `filtered` entries already handed to the display.
    pub rendered_count: usize,
    /// Fetch status.
    pub load: LoadStatus,
}

impl CatalogState {
    /// What: Create an empty controller in the `Loading` state.
    ///
    /// Inputs:
    /// - `config`: Page size and persistence keys; a zero page size is raised to 1
    /// - `favorites`: Favorites set already read from storage
    ///
    /// Output:
    /// - Fresh state awaiting `load_items` or `load_failed`.
    #[must_use]
    pub fn new(mut config: CatalogConfig, favorites: BTreeSet<BookId>) -> Self {
        config.page_size = config.page_size.max(1);
        Self {
            config,
            favorites,
            ..Self::default()
        }
    }

    /// Whether the catalog finished loading successfully.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.load, LoadStatus::Ready)
    }

    /// Whether more filtered items remain to be rendered.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.rendered_count < self.filtered.len()
    }

    /// Items already handed to the display, in display order.
    #[must_use]
    pub fn rendered(&self) -> &[BookItem] {
        &self.filtered[..self.rendered_count.min(self.filtered.len())]
    }

    /// Whether `id` is currently a favorite.
    #[must_use]
    pub fn is_favorite(&self, id: BookId) -> bool {
        self.favorites.contains(&id)
    }

    /// Number of favorites, shown next to the favorites filter.
    #[must_use]
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Look up a loaded book by id.
    #[must_use]
    pub fn book(&self, id: BookId) -> Option<&BookItem> {
        self.all_items.iter().find(|b| b.id == id)
    }
}
