//! Catalog controller operations.
//!
//! Every operation mutates a [`crate::state::CatalogState`] and returns a
//! description of what the display should do; none of them touch a display
//! directly. See [`crate::render::present`] for applying the result.

pub mod debounce;
pub mod favorites;
pub mod filter;
pub mod load;
pub mod paging;
pub mod sort;

pub use debounce::SearchDebouncer;
pub use favorites::{FavoriteToggle, toggle_favorite};
pub use filter::{apply_filters, compute_filtered, set_category, set_sort};
pub use load::{load_failed, load_items, load_items_with_term, normalize_items};
pub use paging::{PageRender, ViewUpdate, render_next_page};
pub use sort::sort_items;
