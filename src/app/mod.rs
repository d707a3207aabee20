//! Aklatell terminal runtime.
//!
//! Sets up the terminal, starts the background producers (terminal events,
//! ticks, the single catalog fetch), drives the `select!` loop and restores
//! the terminal on exit.

/// Channels and background producers.
mod background;
/// Terminal setup and restoration utilities.
mod terminal;

use std::sync::atomic::Ordering;
use std::time::Instant;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::sources::LoadError;
use crate::state::{AppState, Category};
use crate::storage::FileStore;
use crate::theme::{Settings, storage_path};
use crate::ui::ui;

use background::{Channels, spawn_event_thread};
use terminal::{restore_terminal, setup_terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that skips raw TTY setup and the event thread.
pub const HEADLESS_ENV: &str = "AKLATELL_TEST_HEADLESS";

/// What: Run the catalog browser until the user quits.
///
/// Inputs:
/// - `settings`: Effective settings (settings.conf with CLI overrides applied)
/// - `search`: Search term to start with
/// - `favorites_only`: Start in the favorites-only view
///
/// Output:
/// - `Ok(())` on a clean exit; `Err` on terminal setup failures.
///
/// Details:
/// - Favorites and theme are restored from the storage file before the first frame.
/// - The catalog is fetched exactly once; a failure is shown inline and never retried.
/// - With `AKLATELL_TEST_HEADLESS=1` nothing is drawn and no terminal events are read.
///
/// # Errors
/// - Returns an error when raw mode or the alternate screen cannot be set up or restored.
pub async fn run(settings: Settings, search: Option<String>, favorites_only: bool) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let store = FileStore::open(&storage_path());
    let mut app = AppState::new(&settings, Box::new(store));
    if let Some(term) = search {
        app.input = term;
    }
    if favorites_only {
        app.catalog.category = Category::Favorites;
    }
    tracing::info!(
        source = %settings.catalog_source,
        favorites = app.catalog.favorite_count(),
        theme = app.theme_pref.as_str(),
        "[Runtime] State initialized"
    );

    let mut channels = Channels::new(settings.catalog_source.clone(), settings.fetch_timeout);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    let mut loaded = false;
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(&ev, &mut app, Instant::now()) {
                    break;
                }
            }
            result = &mut channels.load_rx, if !loaded => {
                loaded = true;
                let result = result.unwrap_or_else(|_| {
                    Err(LoadError::Malformed("catalog fetch task ended without a result".into()))
                });
                app.finish_load(result);
            }
            Some(()) = channels.tick_rx.recv() => {
                app.tick(Instant::now());
            }
            else => break,
        }
    }

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    tracing::info!("[Runtime] Exiting");
    Ok(())
}
