//! HTML card-grid surface used by `--export-html`.

use std::fmt::Write as _;

use super::DisplaySurface;
use super::view::CardView;
use crate::state::BookId;

/// What: Escape text for insertion into HTML content or a quoted attribute.
///
/// Inputs:
/// - `text`: Untrusted text
///
/// Output:
/// - Text with `&`, `<`, `>`, `"` and `'` replaced by entities.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// Surface that accumulates book cards and renders them as HTML.
#[derive(Clone, Debug, Default)]
pub struct HtmlSurface {
    cards: Vec<CardView>,
    no_results: bool,
    error: Option<String>,
    has_more: bool,
}

impl HtmlSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rendered cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// What: Render the card grid contents.
    ///
    /// Output:
    /// - Error block, no-results block, or the concatenated card markup.
    #[must_use]
    pub fn grid_html(&self) -> String {
        if let Some(msg) = &self.error {
            return format!("<div class=\"error\">{}</div>\n", escape_html(msg));
        }
        if self.no_results {
            return "<div class=\"no-results\">📖 No books match your search.</div>\n".to_string();
        }
        let mut out = String::new();
        for card in &self.cards {
            render_card(&mut out, card);
        }
        out
    }

    /// What: Render a standalone HTML document with the grid and load-more control.
    ///
    /// Inputs:
    /// - `title`: Document title
    ///
    /// Output:
    /// - Complete HTML document.
    #[must_use]
    pub fn document(&self, title: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "<!DOCTYPE html>");
        let _ = writeln!(out, "<html lang=\"en\">");
        let _ = writeln!(
            out,
            "<head><meta charset=\"utf-8\"><title>{}</title></head>",
            escape_html(title)
        );
        let _ = writeln!(out, "<body>");
        let _ = writeln!(out, "<main id=\"booksGrid\">");
        out.push_str(&self.grid_html());
        let _ = writeln!(out, "</main>");
        if self.has_more {
            let _ = writeln!(
                out,
                "<button id=\"loadMoreBtn\" type=\"button\">Load more</button>"
            );
        }
        let _ = writeln!(out, "</body>");
        let _ = writeln!(out, "</html>");
        out
    }
}

/// Append the markup of one card to `out`. All card text is escaped here.
fn render_card(out: &mut String, card: &CardView) {
    let title = escape_html(&card.title);
    let author = escape_html(&card.author);
    let preview = escape_html(&card.preview);
    let glyph = escape_html(&card.glyph);
    let link = escape_html(&card.link);
    let active = if card.is_favorite { " active" } else { "" };
    let _ = writeln!(out, "<article class=\"book-card\">");
    let _ = writeln!(
        out,
        "  <a href=\"{link}\" class=\"card-link-overlay\" aria-label=\"Read {title}\"></a>"
    );
    let _ = writeln!(
        out,
        "  <button class=\"favorite-btn{active}\" data-id=\"{}\" aria-pressed=\"{}\" aria-label=\"{}\">&#9829;</button>",
        card.id,
        card.is_favorite,
        card.favorite_label()
    );
    let _ = writeln!(out, "  <div class=\"book-visual\">");
    if let Some(image) = &card.image {
        let _ = writeln!(
            out,
            "    <img src=\"{}\" alt=\"{title} cover\" class=\"book-cover\" loading=\"lazy\">",
            escape_html(image)
        );
    }
    let _ = writeln!(out, "    <div class=\"book-emoji\">{glyph}</div>");
    let _ = writeln!(out, "  </div>");
    let _ = writeln!(out, "  <h2 class=\"book-title\">{title}</h2>");
    let _ = writeln!(out, "  <p class=\"book-author\">{author}</p>");
    let _ = writeln!(out, "  <p class=\"book-preview\">{preview}</p>");
    let _ = writeln!(out, "</article>");
}

impl DisplaySurface for HtmlSurface {
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
        self.clear();
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
