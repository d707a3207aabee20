use std::time::{Duration, Instant};

/// Default quiet period before a typed search term is applied.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Coalesces rapid search keystrokes into one filter recompute.
///
/// Every keystroke calls [`SearchDebouncer::note_input`]; the tick handler
/// calls [`SearchDebouncer::poll`], which releases the latest term once the
/// input has been quiet for the configured period.
#[derive(Clone, Debug)]
pub struct SearchDebouncer {
    quiet: Duration,
    pending: Option<String>,
    changed_at: Option<Instant>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}

impl SearchDebouncer {
    /// Create a debouncer with the given quiet period.
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            changed_at: None,
        }
    }

    /// Record the latest input value and restart the quiet period.
    pub fn note_input(&mut self, text: &str, now: Instant) {
        self.pending = Some(text.to_string());
        self.changed_at = Some(now);
    }

    /// Whether a term is waiting for the quiet period to elapse.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// What: Release the pending term once the input has been quiet long enough.
    ///
    /// Inputs:
    /// - `now`: Current instant
    ///
    /// Output:
    /// - `Some(term)` exactly once per burst of input; `None` otherwise.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let changed_at = self.changed_at?;
        if now.saturating_duration_since(changed_at) < self.quiet {
            return None;
        }
        self.changed_at = None;
        self.pending.take()
    }

    /// Release the pending term immediately (e.g. on Enter).
    pub fn flush(&mut self) -> Option<String> {
        self.changed_at = None;
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Rapid keystrokes collapse into one release
    ///
    /// - Input: "n", "no", "nol" typed 100ms apart, quiet 300ms
    /// - Output: Nothing until 300ms after the last key, then "nol" once
    fn debouncer_releases_last_term_once() {
        let mut d = SearchDebouncer::new(Duration::from_millis(300));
        let t0 = Instant::now();
        d.note_input("n", t0);
        d.note_input("no", t0 + Duration::from_millis(100));
        d.note_input("nol", t0 + Duration::from_millis(200));
        assert_eq!(d.poll(t0 + Duration::from_millis(400)), None);
        assert_eq!(d.poll(t0 + Duration::from_millis(500)).as_deref(), Some("nol"));
        assert_eq!(d.poll(t0 + Duration::from_secs(5)), None);
        assert!(!d.is_pending());
    }

    #[test]
    /// What: Flush bypasses the quiet period
    ///
    /// - Input: One keystroke, immediate flush
    /// - Output: Term released; later poll yields nothing
    fn flush_releases_immediately() {
        let mut d = SearchDebouncer::default();
        let t0 = Instant::now();
        d.note_input("rizal", t0);
        assert_eq!(d.flush().as_deref(), Some("rizal"));
        assert_eq!(d.poll(t0 + Duration::from_secs(1)), None);
    }
}
