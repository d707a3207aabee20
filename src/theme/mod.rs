//! Palette, configuration paths and settings.

use ratatui::style::Color;

use crate::storage::ThemePreference;

pub mod paths;
pub mod settings;

pub use paths::{config_dir, logs_dir, set_config_dir_override, settings_path, storage_path};
pub use settings::{Settings, load_settings, parse_settings};

/// Application palette used by rendering code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Canvas background.
    pub base: Color,
    /// Panel borders.
    pub overlay: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text (authors, previews, hints).
    pub subtext: Color,
    /// Selection and focused borders.
    pub accent: Color,
    /// Favorite marker.
    pub favorite: Color,
    /// Inline errors.
    pub error: Color,
}

impl Theme {
    /// Palette for the light preference.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            base: Color::Rgb(0xef, 0xf1, 0xf5),
            overlay: Color::Rgb(0x9c, 0xa0, 0xb0),
            text: Color::Rgb(0x4c, 0x4f, 0x69),
            subtext: Color::Rgb(0x6c, 0x6f, 0x85),
            accent: Color::Rgb(0x20, 0x9f, 0xb5),
            favorite: Color::Rgb(0xd2, 0x0f, 0x39),
            error: Color::Rgb(0xe6, 0x45, 0x53),
        }
    }

    /// Palette for the dark preference.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            overlay: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext: Color::Rgb(0xa6, 0xad, 0xc8),
            accent: Color::Rgb(0x74, 0xc7, 0xec),
            favorite: Color::Rgb(0xf3, 0x8b, 0xa8),
            error: Color::Rgb(0xeb, 0xa0, 0xac),
        }
    }

    /// Palette for a stored preference.
    #[must_use]
    pub const fn for_preference(pref: ThemePreference) -> Self {
        match pref {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
