use super::DisplaySurface;
use super::view::CardView;
use crate::state::BookId;

/// In-memory surface backing the terminal results list.
///
/// The ratatui layer redraws from this every frame; it never looks at the
/// controller's `filtered` list directly.
#[derive(Clone, Debug, Default)]
pub struct ListSurface {
    /// Cards in display order.
    pub cards: Vec<CardView>,
    /// Explicit "no results" state.
    pub no_results: bool,
    /// Inline error, shown instead of the list.
    pub error: Option<String>,
    /// Whether "load more" is available.
    pub has_more: bool,
}

impl ListSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Card at `index`, if rendered.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardView> {
        self.cards.get(index)
    }

    /// Number of rendered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no card is rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl DisplaySurface for ListSurface {
    fn clear(&mut self) {
        self.cards.clear();
        self.no_results = false;
        self.error = None;
        self.has_more = false;
    }

    fn append(&mut self, cards: &[CardView]) {
        self.no_results = false;
        self.cards.extend_from_slice(cards);
    }

    fn show_no_results(&mut self) {
        self.no_results = true;
    }

    fn show_error(&mut self, message: &str) {
        self.cards.clear();
        self.no_results = false;
        self.has_more = false;
        self.error = Some(message.to_string());
    }

    fn set_has_more(&mut self, has_more: bool) {
        self.has_more = has_more;
    }

    fn set_favorite(&mut self, id: BookId, is_favorite: bool) {
        for card in self.cards.iter_mut().filter(|c| c.id == id) {
            card.is_favorite = is_favorite;
        }
    }
}
