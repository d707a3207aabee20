use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Category};

/// What: Render the search box with sort/category/favorites in its title.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state
/// - `area`: Target rectangle
///
/// Details:
/// - Places the terminal cursor at the end of the input.
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = app.theme();
    let category = match app.catalog.category {
        Category::All => "All books",
        Category::Favorites => "Favorites",
    };
    let title = Line::from(vec![
        Span::styled(
            " Aklatell ",
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· Sort: {} ", app.catalog.sort_mode.label()), Style::default().fg(th.subtext)),
        Span::styled(format!("· {category} "), Style::default().fg(th.subtext)),
        Span::styled(
            format!("· ♥ {} ", app.catalog.favorite_count()),
            Style::default().fg(th.favorite),
        ),
    ]);
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(th.accent)),
        Span::styled(app.input.as_str(), Style::default().fg(th.text)),
    ]))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.accent)),
    );
    f.render_widget(input, area);

    let typed = u16::try_from(unicode_width::UnicodeWidthStr::width(app.input.as_str()))
        .unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(3)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2));
    f.set_cursor_position((x, area.y.saturating_add(1)));
}
