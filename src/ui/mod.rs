//! Terminal rendering.
//!
//! Layout, top to bottom:
//! - Search box (title shows sort mode, category and favorite count)
//! - Results list drawn from the [`crate::render::ListSurface`]
//! - Footer with view status, toast and key hints

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;

mod footer;
mod header;
mod results;

pub use results::truncate_to_width;

/// What: Draw one full frame.
///
/// Inputs:
/// - `f`: ratatui frame
/// - `app`: Application state (mutable for the list scroll state)
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = app.theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(area);

    header::render_header(f, app, chunks[0]);
    results::render_results(f, app, chunks[1]);
    footer::render_footer(f, app, chunks[2]);
}
