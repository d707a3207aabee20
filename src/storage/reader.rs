//! Reader preferences and per-book reading progress.
//!
//! Book pages share three display preferences (theme, font, size) and keep one
//! progress entry per page, keyed by the page's file name.

use super::{KeyValueStore, StorageError};

/// Storage key of the reader theme.
pub const READER_THEME_KEY: &str = "reader_theme";
/// Storage key of the reader font.
pub const READER_FONT_KEY: &str = "reader_font";
/// Storage key of the reader font size.
pub const READER_SIZE_KEY: &str = "reader_size";
/// Prefix of per-book progress keys.
pub const PROGRESS_KEY_PREFIX: &str = "book_prog_";

/// Lower bound (exclusive) for offering to resume.
const RESUME_MIN_PCT: f64 = 0.10;
/// Upper bound (exclusive) for offering to resume.
const RESUME_MAX_PCT: f64 = 99.0;

/// Page color scheme while reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReaderTheme {
    /// Default.
    #[default]
    Light,
    /// Warm paper tone.
    Sepia,
    /// Dark background.
    Dark,
}

/// Body font while reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReaderFont {
    /// Default.
    #[default]
    Arial,
    /// Serif.
    Spectral,
    /// Slab serif.
    Domine,
}

/// Base font size while reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontSize {
    /// `1rem`.
    Small,
    /// `1.125rem` (default).
    #[default]
    Medium,
    /// `1.25rem`.
    Large,
}

impl ReaderTheme {
    /// Stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Sepia => "sepia",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or user-supplied value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "sepia" => Some(Self::Sepia),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl ReaderFont {
    /// Stored representation (the font family name).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arial => "Arial",
            Self::Spectral => "Spectral",
            Self::Domine => "Domine",
        }
    }

    /// Parse a stored or user-supplied value, ignoring case.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arial" => Some(Self::Arial),
            "spectral" => Some(Self::Spectral),
            "domine" => Some(Self::Domine),
            _ => None,
        }
    }
}

impl FontSize {
    /// Stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Parse a stored or user-supplied value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    /// CSS base font size for this setting.
    #[must_use]
    pub const fn base_rem(self) -> &'static str {
        match self {
            Self::Small => "1rem",
            Self::Medium => "1.125rem",
            Self::Large => "1.25rem",
        }
    }
}

/// The three reader display preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderPrefs {
    /// Color scheme.
    pub theme: ReaderTheme,
    /// Font family.
    pub font: ReaderFont,
    /// Font size.
    pub size: FontSize,
}

impl ReaderPrefs {
    /// What: Load reader preferences, falling back per field.
    ///
    /// Inputs:
    /// - `store`: Key-value store
    ///
    /// Output:
    /// - Preferences where any missing or unrecognized value takes its default.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let theme = store
            .get(READER_THEME_KEY)
            .and_then(|v| ReaderTheme::parse(&v))
            .unwrap_or_default();
        let font = store
            .get(READER_FONT_KEY)
            .and_then(|v| ReaderFont::parse(&v))
            .unwrap_or_default();
        let size = store
            .get(READER_SIZE_KEY)
            .and_then(|v| FontSize::parse(&v))
            .unwrap_or_default();
        Self { theme, font, size }
    }

    /// What: Persist all three preferences.
    ///
    /// # Errors
    /// - Returns the first `StorageError` raised by the backend.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        store.set(READER_THEME_KEY, self.theme.as_str())?;
        store.set(READER_FONT_KEY, self.font.as_str())?;
        store.set(READER_SIZE_KEY, self.size.as_str())
    }
}

/// Reading position of one book page, as a percentage of the scrollable height.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingProgress {
    /// Storage key (`book_prog_<page>`).
    pub key: String,
    /// Saved percentage, if any.
    pub percent: Option<f64>,
}

impl ReadingProgress {
    /// What: Build the progress key for a book page.
    ///
    /// Inputs:
    /// - `page`: Page path or URL path (e.g. `/books/noli.html`)
    ///
    /// Output:
    /// - `book_prog_` followed by the last path segment (`book_prog_noli.html`).
    #[must_use]
    pub fn key_for(page: &str) -> String {
        let last = page.rsplit('/').next().unwrap_or(page);
        format!("{PROGRESS_KEY_PREFIX}{last}")
    }

    /// What: Read the saved progress of `page`.
    ///
    /// Inputs:
    /// - `store`: Key-value store
    /// - `page`: Page path
    ///
    /// Output:
    /// - Progress whose `percent` is `None` when absent or not a finite number.
    pub fn load(store: &dyn KeyValueStore, page: &str) -> Self {
        let key = Self::key_for(page);
        let percent = store
            .get(&key)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|p| p.is_finite());
        Self { key, percent }
    }

    /// What: Convert a scroll position into a progress percentage.
    ///
    /// Inputs:
    /// - `scroll_top`: Current scroll offset
    /// - `doc_height`: Scrollable height (document height minus viewport)
    ///
    /// Output:
    /// - Percentage in `0.0..=100.0`; `0.0` when there is nothing to scroll.
    #[must_use]
    pub fn percent_for(scroll_top: f64, doc_height: f64) -> f64 {
        if doc_height <= 0.0 {
            return 0.0;
        }
        (scroll_top / doc_height * 100.0).clamp(0.0, 100.0)
    }

    /// Whether the saved position is far enough into the book, and not at its end,
    /// to offer resuming.
    #[must_use]
    pub fn offers_resume(&self) -> bool {
        self.percent
            .is_some_and(|p| p > RESUME_MIN_PCT && p < RESUME_MAX_PCT)
    }

    /// Scroll offset that restores the saved position for a page of `doc_height`.
    #[must_use]
    pub fn resume_offset(&self, doc_height: f64) -> Option<f64> {
        self.percent.map(|p| p / 100.0 * doc_height.max(0.0))
    }

    /// What: Save a new percentage.
    ///
    /// # Errors
    /// - Returns `StorageError` when the backend write fails.
    pub fn save(&mut self, store: &mut dyn KeyValueStore, percent: f64) -> Result<(), StorageError> {
        let p = percent.clamp(0.0, 100.0);
        store.set(&self.key, &p.to_string())?;
        self.percent = Some(p);
        Ok(())
    }

    /// What: Forget the saved position.
    ///
    /// # Errors
    /// - Returns `StorageError` when the backend write fails.
    pub fn reset(&mut self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        store.remove(&self.key)?;
        self.percent = None;
        Ok(())
    }
}
