//! Display surfaces and the step that applies controller output to them.
//!
//! Controller operations in [`crate::logic`] return [`ViewUpdate`] values;
//! [`present`] turns those into calls on a [`DisplaySurface`]. The terminal
//! list ([`ListSurface`]) and the HTML export ([`HtmlSurface`]) are the two
//! surfaces.

pub mod html;
pub mod list;
pub mod view;

pub use html::{HtmlSurface, escape_html};
pub use list::ListSurface;
pub use view::{CardView, ViewStatus, cards_for, view_status};

use crate::logic::{FavoriteToggle, PageRender, ViewUpdate};
use crate::state::{BookId, CatalogState};

/// An append-only list container for rendered cards.
pub trait DisplaySurface {
    /// Remove every card and any empty/error state.
    fn clear(&mut self);
    /// Append cards after the ones already shown.
    fn append(&mut self, cards: &[CardView]);
    /// Show the explicit "no results" state.
    fn show_no_results(&mut self);
    /// Show an inline error in place of the list.
    fn show_error(&mut self, message: &str);
    /// Show or hide the "load more" control.
    fn set_has_more(&mut self, has_more: bool);
    /// Update the favorite affordance of every rendered card with `id`.
    fn set_favorite(&mut self, id: BookId, is_favorite: bool);
}

/// What: Apply a controller update to a display surface.
///
/// Inputs:
/// - `surface`: Target surface
/// - `st`: Catalog state the update was computed from
/// - `update`: Output of `apply_filters`, `render_next_page` or a refilter
///
/// Output:
/// - Surface cleared when requested, then appended to or switched to the no-results state.
///
/// Details:
/// - Ignored unless the catalog is ready so a load error stays visible.
pub fn present(surface: &mut dyn DisplaySurface, st: &CatalogState, update: &ViewUpdate) {
    if !st.is_ready() {
        return;
    }
    if update.clear {
        surface.clear();
    }
    match &update.page {
        PageRender::NoResults => {
            surface.show_no_results();
            surface.set_has_more(false);
        }
        PageRender::Appended { range, has_more } => {
            surface.append(&cards_for(st, range.clone()));
            surface.set_has_more(*has_more);
        }
        PageRender::Exhausted => surface.set_has_more(false),
    }
}

/// What: Apply a favorite toggle to a display surface.
///
/// Inputs:
/// - `surface`: Target surface
/// - `st`: Catalog state after the toggle
/// - `toggle`: Output of `toggle_favorite`
///
/// Output:
/// - Every rendered occurrence updated; the refiltered view presented when present.
pub fn present_toggle(surface: &mut dyn DisplaySurface, st: &CatalogState, toggle: &FavoriteToggle) {
    surface.set_favorite(toggle.id, toggle.is_favorite);
    if let Some(update) = &toggle.refiltered {
        present(surface, st, update);
    }
}
