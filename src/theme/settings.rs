//! `settings.conf` parsing.
//!
//! Format: one `key = value` per line; blank lines and lines starting with
//! `#`, `//` or `;` are ignored.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::logic::debounce::DEFAULT_SEARCH_DEBOUNCE;
use crate::sources::DEFAULT_FETCH_TIMEOUT;
use crate::state::catalog::{DEFAULT_FAVORITES_KEY, DEFAULT_PAGE_SIZE, DEFAULT_THEME_KEY};
use crate::state::{CatalogConfig, SortMode};

/// Commented skeleton written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "\
# Aklatell settings
#
# Where books.json is loaded from: an http(s) URL or a local path.
catalog_source = books.json

# Cards appended per page / per \"load more\".
page_size = 100

# Quiet period after typing before the search is applied (milliseconds).
search_debounce_ms = 300

# Give up loading the catalog after this many seconds.
fetch_timeout_secs = 15

# Initial sort: newest | title | author
sort_mode = newest

# Storage keys (change to keep several catalogs apart).
favorites_key = aklatell_favorites
theme_key = aklatell_theme
";

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Catalog URL or path.
    pub catalog_source: String,
    /// Cards per page.
    pub page_size: usize,
    /// Search debounce quiet period.
    pub search_debounce: Duration,
    /// Catalog fetch timeout.
    pub fetch_timeout: Duration,
    /// Initial sort mode.
    pub sort_mode: SortMode,
    /// Favorites storage key.
    pub favorites_key: String,
    /// Theme preference storage key.
    pub theme_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_source: "books.json".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            sort_mode: SortMode::Newest,
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
        }
    }
}

impl Settings {
    /// Controller parameters derived from these settings.
    #[must_use]
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            page_size: self.page_size,
            favorites_key: self.favorites_key.clone(),
        }
    }
}

/// Whether a line carries no setting.
fn skip_comment_or_empty(line: &str) -> bool {
    let t = line.trim();
    t.is_empty() || t.starts_with('#') || t.starts_with("//") || t.starts_with(';')
}

/// Parse a positive integer, logging and rejecting anything else.
fn parse_positive(key: &str, value: &str) -> Option<u64> {
    match value.parse::<u64>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            tracing::warn!(key, value, "[Settings] Expected a positive integer; keeping default");
            None
        }
    }
}

/// What: Parse settings text, starting from defaults.
///
/// Inputs:
/// - `content`: Contents of `settings.conf`
///
/// Output:
/// - `Settings` with every recognized, valid key applied.
///
/// Details:
/// - Keys are case-insensitive; later lines win.
/// - Unknown keys and invalid values are logged and ignored.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut s = Settings::default();
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            tracing::warn!(line = line.trim(), "[Settings] Ignoring line without '='");
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim();
        match key.as_str() {
            "catalog_source" if !value.is_empty() => s.catalog_source = value.to_string(),
            "page_size" => {
                if let Some(n) = parse_positive(&key, value) {
                    s.page_size = usize::try_from(n).unwrap_or(DEFAULT_PAGE_SIZE);
                }
            }
            "search_debounce_ms" => match value.parse::<u64>() {
                Ok(ms) => s.search_debounce = Duration::from_millis(ms),
                Err(_) => tracing::warn!(value, "[Settings] Invalid search_debounce_ms"),
            },
            "fetch_timeout_secs" => {
                if let Some(n) = parse_positive(&key, value) {
                    s.fetch_timeout = Duration::from_secs(n);
                }
            }
            "sort_mode" => match SortMode::from_config_key(value) {
                Some(m) => s.sort_mode = m,
                None => tracing::warn!(value, "[Settings] Unknown sort_mode"),
            },
            "favorites_key" if !value.is_empty() => s.favorites_key = value.to_string(),
            "theme_key" if !value.is_empty() => s.theme_key = value.to_string(),
            other => tracing::debug!(key = other, "[Settings] Ignoring unknown or empty key"),
        }
    }
    s
}

/// What: Load settings from `path`, writing the skeleton when the file is missing.
///
/// Inputs:
/// - `path`: Settings file location
///
/// Output:
/// - Parsed settings, or defaults when the file cannot be read.
pub fn load_settings(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if let Some(dir) = path.parent() {
                let _ = fs::create_dir_all(dir);
            }
            match fs::write(path, SETTINGS_SKELETON_CONTENT) {
                Ok(()) => tracing::info!(path = %path.display(), "wrote default settings skeleton"),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to write settings skeleton");
                }
            }
            Settings::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}
