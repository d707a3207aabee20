use super::{KeyValueStore, StorageError};

/// Catalog light/dark preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    /// Light palette (default when nothing is stored).
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl ThemePreference {
    /// Stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other preference.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// What: Read the light/dark preference.
///
/// Inputs:
/// - `store`: Key-value store
/// - `key`: Theme key (e.g. `aklatell_theme`)
///
/// Output:
/// - `Dark` only when the stored value is exactly `dark`; everything else is `Light`.
pub fn load_theme_preference(store: &dyn KeyValueStore, key: &str) -> ThemePreference {
    match store.get(key).as_deref() {
        Some("dark") => ThemePreference::Dark,
        _ => ThemePreference::Light,
    }
}

/// What: Persist the light/dark preference.
///
/// Inputs:
/// - `store`: Key-value store
/// - `key`: Theme key
/// - `pref`: Preference to store
///
/// Output:
/// - `Ok(())` once stored.
///
/// # Errors
/// - Returns `StorageError` when the backend write fails.
pub fn save_theme_preference(
    store: &mut dyn KeyValueStore,
    key: &str,
    pref: ThemePreference,
) -> Result<(), StorageError> {
    store.set(key, pref.as_str())
}
