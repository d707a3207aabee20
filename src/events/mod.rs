//! Keyboard handling for the catalog browser.

use std::time::Instant;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::AppState;

/// Rows moved by PageUp/PageDown.
const PAGE_STEP: isize = 10;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event
/// - `app`: Application state
/// - `now`: Current instant (search debounce clock)
///
/// Output:
/// - `true` to signal the application should exit.
///
/// Details:
/// - Printable keys edit the search box; the filter runs after the debounce window
///   or immediately on Enter.
/// - Ctrl shortcuts: F favorite, O favorites only, L load more, T theme, C quit.
/// - Esc clears a non-empty search, otherwise quits.
pub fn handle_event(ev: &CEvent, app: &mut AppState, now: Instant) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.modifiers.contains(KeyModifiers::CONTROL) {
        return handle_ctrl(ke, app);
    }
    app.toast = None;
    match ke.code {
        KeyCode::Esc => {
            if app.input.is_empty() {
                return true;
            }
            app.input.clear();
            app.submit_search();
        }
        KeyCode::Enter => app.submit_search(),
        KeyCode::Backspace => {
            if app.input.pop().is_some() {
                app.on_input_changed(now);
            }
        }
        KeyCode::Char(c) => {
            app.input.push(c);
            app.on_input_changed(now);
        }
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-PAGE_STEP),
        KeyCode::PageDown => app.move_selection(PAGE_STEP),
        KeyCode::Tab => app.cycle_sort(),
        _ => {}
    }
    false
}

/// Handle Ctrl-modified keys.
fn handle_ctrl(ke: &KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char('c') => return true,
        KeyCode::Char('f') => app.toggle_selected_favorite(),
        KeyCode::Char('o') => {
            app.toast = None;
            app.toggle_category();
        }
        KeyCode::Char('l') => {
            if !app.load_more() {
                app.toast = Some("No more books to load".to_string());
            }
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
            app.toast = Some(format!("Theme: {}", app.theme_pref.as_str()));
        }
        _ => {}
    }
    false
}
