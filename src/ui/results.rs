use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthChar;

use crate::render::{CardView, ViewStatus, view_status};
use crate::state::AppState;
use crate::theme::Theme;

/// What: Truncate `s` to at most `max` terminal columns, adding `…` when cut.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max`: Available columns
///
/// Output:
/// - Owned string whose display width is `<= max`.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if unicode_width::UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Build the two-line list entry of one card.
fn card_item<'a>(card: &'a CardView, width: usize, th: &Theme) -> ListItem<'a> {
    let heart = if card.is_favorite { "♥ " } else { "♡ " };
    let head_width = width.saturating_sub(6);
    let line1 = Line::from(vec![
        Span::styled(heart, Style::default().fg(th.favorite)),
        Span::raw(format!("{} ", card.glyph)),
        Span::styled(
            truncate_to_width(&card.title, head_width),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    let author = if card.author.is_empty() {
        "Unknown author"
    } else {
        card.author.as_str()
    };
    let line2 = Line::from(vec![
        Span::raw("     "),
        Span::styled(
            truncate_to_width(author, head_width / 2),
            Style::default().fg(th.subtext).add_modifier(Modifier::ITALIC),
        ),
        Span::styled(
            format!("  {}", truncate_to_width(&card.preview, head_width / 2)),
            Style::default().fg(th.subtext),
        ),
    ]);
    ListItem::new(vec![line1, line2])
}

/// What: Render the results pane from the list surface.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state (list scroll state is updated)
/// - `area`: Target rectangle
///
/// Details:
/// - Loading, error and no-results states replace the list with a message.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = app.theme();
    let status = view_status(&app.catalog);
    let title = match &status {
        ViewStatus::Paged { rendered, total, .. } => format!(" Books ({rendered}/{total}) "),
        _ => " Books ".to_string(),
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(th.overlay)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay));

    let message = if let Some(err) = &app.surface.error {
        Some((err.clone(), th.error))
    } else if matches!(status, ViewStatus::Loading) {
        Some((format!("Loading books from {}…", app.source), th.subtext))
    } else if app.surface.no_results {
        Some(("📖 No books match your search.".to_string(), th.subtext))
    } else {
        None
    };
    if let Some((text, color)) = message {
        let p = Paragraph::new(Span::styled(text, Style::default().fg(color)))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(p, area);
        return;
    }

    let width = usize::from(area.width.saturating_sub(2));
    let items: Vec<ListItem> = app
        .surface
        .cards
        .iter()
        .map(|c| card_item(c, width, &th))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(th.base).bg(th.accent))
        .highlight_symbol("▌");
    f.render_stateful_widget(list, area, &mut app.list_state);
}
