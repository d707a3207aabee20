use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::{mpsc, oneshot};

use crate::sources::{LoadError, fetch_catalog};
use crate::state::RawBook;

/// Interval of the housekeeping tick (debounce release, redraw).
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// What: Channels between the main loop and its background producers.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving end of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the reader thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Periodic ticks.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    /// The single catalog fetch result.
    pub load_rx: oneshot::Receiver<Result<Vec<RawBook>, LoadError>>,
}

impl Channels {
    /// What: Create the channels and start the tick and fetch tasks.
    ///
    /// Inputs:
    /// - `source`: Catalog path or URL
    /// - `timeout`: Fetch deadline
    ///
    /// Output:
    /// - Channels ready for the main `select!` loop.
    pub fn new(source: String, timeout: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        let (load_tx, load_rx) = oneshot::channel();

        spawn_tick_worker(tick_tx);
        spawn_load_worker(source, timeout, load_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            tick_rx,
            load_rx,
        }
    }
}

/// Send `()` every [`TICK_INTERVAL`] until the receiver goes away.
fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// Fetch the catalog once and hand the outcome to the main loop.
fn spawn_load_worker(
    source: String,
    timeout: Duration,
    load_tx: oneshot::Sender<Result<Vec<RawBook>, LoadError>>,
) {
    tokio::spawn(async move {
        tracing::info!(source = %source, timeout_ms = timeout.as_millis(), "[Load] Fetching catalog");
        let result = fetch_catalog(&source, timeout).await;
        match &result {
            Ok(records) => tracing::info!(count = records.len(), "[Load] Catalog fetched"),
            Err(e) => tracing::warn!(error = %e, "[Load] Catalog fetch failed"),
        }
        let _ = load_tx.send(result);
    });
}

/// What: Read terminal events on a dedicated thread.
///
/// Inputs:
/// - `headless`: Skip the thread entirely (tests)
/// - `event_tx`: Destination for events
/// - `cancelled`: Exit flag checked between polls
///
/// Details:
/// - Polls with a 50 ms timeout so the flag is honoured promptly.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read()
                        && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
