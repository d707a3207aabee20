//! Pure view computation: what a card shows and which state the view is in.

use crate::state::{BookId, BookItem, CatalogState, LoadStatus};

/// Glyph shown when a book has no glyph of its own.
pub const FALLBACK_GLYPH: &str = "📖";

/// Link target used when a book has no page.
pub const FALLBACK_LINK: &str = "#";

/// Display-ready data for one rendered book. Text is raw; surfaces escape it
/// as their medium requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    /// Book id, used to locate every rendered occurrence on favorite toggles.
    pub id: BookId,
    /// Title text.
    pub title: String,
    /// Author text.
    pub author: String,
    /// Preview text.
    pub preview: String,
    /// Cover image, if any.
    pub image: Option<String>,
    /// Glyph, with fallback applied.
    pub glyph: String,
    /// Link, with fallback applied.
    pub link: String,
    /// Favorite affordance state.
    pub is_favorite: bool,
}

impl CardView {
    /// Build the card for `book` with fallbacks applied.
    #[must_use]
    pub fn from_book(book: &BookItem, is_favorite: bool) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            preview: book.preview.clone(),
            image: book.image.clone(),
            glyph: book
                .emoji
                .clone()
                .unwrap_or_else(|| FALLBACK_GLYPH.to_string()),
            link: book
                .link
                .clone()
                .unwrap_or_else(|| FALLBACK_LINK.to_string()),
            is_favorite,
        }
    }

    /// Accessible label of the favorite button.
    #[must_use]
    pub const fn favorite_label(&self) -> &'static str {
        if self.is_favorite {
            "Remove from favorites"
        } else {
            "Add to favorites"
        }
    }
}

/// Coarse state of the catalog view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewStatus {
    /// Waiting for the catalog fetch.
    Loading,
    /// The fetch failed.
    Failed(String),
    /// No book matches the current filters.
    Empty,
    /// At least one page is rendered.
    Paged {
        /// Cards on screen.
        rendered: usize,
        /// Cards in the filtered view.
        total: usize,
        /// `rendered < total`.
        has_more: bool,
    },
}

/// What: Derive the view status from the controller state.
///
/// Inputs:
/// - `st`: Catalog state
///
/// Output:
/// - `Loading`/`Failed` while not ready; `Empty` when the filtered view is empty;
///   otherwise `Paged`.
#[must_use]
pub fn view_status(st: &CatalogState) -> ViewStatus {
    match &st.load {
        LoadStatus::Loading => ViewStatus::Loading,
        LoadStatus::Failed(msg) => ViewStatus::Failed(msg.clone()),
        LoadStatus::Ready if st.filtered.is_empty() => ViewStatus::Empty,
        LoadStatus::Ready => ViewStatus::Paged {
            rendered: st.rendered_count,
            total: st.filtered.len(),
            has_more: st.has_more(),
        },
    }
}

/// What: Build cards for a slice of the filtered view.
///
/// Inputs:
/// - `st`: Catalog state
/// - `range`: Indices into `st.filtered`; clamped to its length
///
/// Output:
/// - One `CardView` per book, with the current favorite state.
#[must_use]
pub fn cards_for(st: &CatalogState, range: std::ops::Range<usize>) -> Vec<CardView> {
    let end = range.end.min(st.filtered.len());
    let start = range.start.min(end);
    st.filtered[start..end]
        .iter()
        .map(|b| CardView::from_book(b, st.is_favorite(b.id)))
        .collect()
}
