//! Application state.
//!
//! [`CatalogState`] is the catalog controller's owned state; [`AppState`]
//! composes it with the terminal-only fields (input box, selection, theme).

pub mod app_state;
pub mod catalog;
pub mod types;

pub use app_state::AppState;
pub use catalog::{CatalogConfig, CatalogState};
pub use types::{BookId, BookItem, Category, LoadStatus, RawBook, RawId, SortMode};
