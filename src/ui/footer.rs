use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::render::{ViewStatus, view_status};
use crate::state::AppState;

/// Key hints shown on the second footer line.
const HINTS: &str = "↑↓ move · Enter search · Tab sort · ^O favorites only · ^F favorite · ^L more · ^T theme · Esc quit";

/// What: Render the status line and key hints.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state
/// - `area`: Target rectangle (two rows)
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = app.theme();
    let status = match view_status(&app.catalog) {
        ViewStatus::Loading => "Loading…".to_string(),
        ViewStatus::Failed(_) => "Catalog unavailable".to_string(),
        ViewStatus::Empty => "No results".to_string(),
        ViewStatus::Paged {
            rendered,
            total,
            has_more,
        } => {
            if has_more {
                format!("Showing {rendered} of {total} · ^L to load more")
            } else {
                format!("Showing all {total}")
            }
        }
    };
    let mut spans = vec![Span::styled(status, Style::default().fg(th.text))];
    if let Some(toast) = &app.toast {
        spans.push(Span::styled(format!("  {toast}"), Style::default().fg(th.accent)));
    }
    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(HINTS, Style::default().fg(th.subtext))),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
