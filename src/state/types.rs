//! Core value types used by the catalog state.

use std::fmt;

/// Stable, orderable identifier of a catalog entry.
///
/// Higher identifiers are newer books; the canonical catalog order is
/// descending by identifier.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier exactly as it arrived from the catalog source.
///
/// Sources are inconsistent about whether ids are numbers or strings, so both
/// are accepted and normalized through [`RawId::normalize`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum RawId {
    /// Integer id (`"id": 42`).
    Int(i64),
    /// Non-integral JSON number (`"id": 42.0`).
    Float(f64),
    /// Textual id (`"id": "42"`).
    Text(String),
}

impl RawId {
    /// What: Convert a raw source identifier into a comparable [`BookId`].
    ///
    /// Inputs:
    /// - `self`: Identifier as decoded from JSON
    ///
    /// Output:
    /// - `Some(BookId)` for integers, integral floats and strings holding an integer; `None` otherwise.
    #[must_use]
    pub fn normalize(&self) -> Option<BookId> {
        match self {
            Self::Int(n) => Some(BookId(*n)),
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(BookId(*f as i64)),
            Self::Float(_) => None,
            Self::Text(s) => s.trim().parse::<i64>().ok().map(BookId),
        }
    }
}

/// A catalog record as decoded from `books.json`, before normalization.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct RawBook {
    /// Source identifier; may be missing or of the wrong type.
    #[serde(default)]
    pub id: Option<RawId>,
    /// Title text.
    #[serde(default)]
    pub title: Option<String>,
    /// Author text.
    #[serde(default)]
    pub author: Option<String>,
    /// Short teaser shown on the card.
    #[serde(default)]
    pub preview: Option<String>,
    /// Optional cover image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Optional glyph shown when there is no cover.
    #[serde(default)]
    pub emoji: Option<String>,
    /// Optional link to the book page.
    #[serde(default)]
    pub link: Option<String>,
}

/// A normalized catalog record. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BookItem {
    /// Normalized identifier.
    pub id: BookId,
    /// Title text (empty when the source omitted it).
    pub title: String,
    /// Author text (empty when the source omitted it).
    pub author: String,
    /// Preview text (empty when the source omitted it).
    pub preview: String,
    /// Cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Display glyph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Navigation link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl BookItem {
    /// What: Build a normalized record from a raw one.
    ///
    /// Inputs:
    /// - `raw`: Decoded source record
    ///
    /// Output:
    /// - `Some(BookItem)` when the id normalizes; `None` when the record has no usable id.
    ///
    /// Details:
    /// - Blank optional fields are treated as absent so fallbacks apply when rendering.
    #[must_use]
    pub fn from_raw(raw: RawBook) -> Option<Self> {
        let id = raw.id.as_ref()?.normalize()?;
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Some(Self {
            id,
            title: raw.title.unwrap_or_default(),
            author: raw.author.unwrap_or_default(),
            preview: raw.preview.unwrap_or_default(),
            image: non_blank(raw.image),
            emoji: non_blank(raw.emoji),
            link: non_blank(raw.link),
        })
    }
}

/// Sorting mode for the catalog view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Highest identifier first.
    #[default]
    Newest,
    /// Title, case-insensitive ascending.
    Title,
    /// Author, case-insensitive ascending.
    Author,
}

impl SortMode {
    /// Stable config/CLI key for this mode.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Title => "title",
            Self::Author => "author",
        }
    }

    /// Parse a config/CLI key; unknown keys yield `None`.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" | "new" | "id" => Some(Self::Newest),
            "title" => Some(Self::Title),
            "author" => Some(Self::Author),
            _ => None,
        }
    }

    /// Next mode in the UI cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Newest => Self::Title,
            Self::Title => Self::Author,
            Self::Author => Self::Newest,
        }
    }

    /// Label shown in the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Title => "Title",
            Self::Author => "Author",
        }
    }
}

/// Category predicate applied before the search term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    /// Every loaded book.
    #[default]
    All,
    /// Only books whose id is in the favorites set.
    Favorites,
}

impl Category {
    /// Switch between the two categories.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::All => Self::Favorites,
            Self::Favorites => Self::All,
        }
    }
}

/// Progress of the one-time catalog fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch still in flight.
    #[default]
    Loading,
    /// Items are available.
    Ready,
    /// Fetch failed; the message is shown inline.
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Normalize ids of every accepted JSON shape
    ///
    /// - Input: int, integral float, padded numeric string, junk string, fractional float
    /// - Output: First three map to `BookId`, the rest to `None`
    fn raw_id_normalizes_numbers_and_numeric_strings() {
        assert_eq!(RawId::Int(7).normalize(), Some(BookId(7)));
        assert_eq!(RawId::Float(12.0).normalize(), Some(BookId(12)));
        assert_eq!(RawId::Text(" 42 ".into()).normalize(), Some(BookId(42)));
        assert_eq!(RawId::Text("abc".into()).normalize(), None);
        assert_eq!(RawId::Float(1.5).normalize(), None);
    }

    #[test]
    /// What: Decode raw records with mixed id types and missing fields
    ///
    /// - Input: JSON array with string id, numeric id, and record without id
    /// - Output: Two books built, the id-less record rejected, blank image dropped
    fn book_from_raw_tolerates_missing_fields() {
        let raw: Vec<RawBook> = serde_json::from_str(
            r#"[{"id":"3","title":"Alpha","image":"  "},{"id":4,"author":"Bo"},{"title":"x"}]"#,
        )
        .expect("valid json");
        let books: Vec<BookItem> = raw.into_iter().filter_map(BookItem::from_raw).collect();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, BookId(3));
        assert_eq!(books[0].image, None);
        assert_eq!(books[1].title, "");
        assert_eq!(books[1].author, "Bo");
    }

    #[test]
    /// What: Sort mode keys and cycling
    ///
    /// - Input: Config keys and repeated `next()`
    /// - Output: Keys round through `from_config_key`; cycle returns to start after three steps
    fn sort_mode_keys_and_cycle() {
        for mode in [SortMode::Newest, SortMode::Title, SortMode::Author] {
            assert_eq!(SortMode::from_config_key(mode.as_config_key()), Some(mode));
        }
        assert_eq!(SortMode::from_config_key("Popularity"), None);
        assert_eq!(SortMode::Newest.next().next().next(), SortMode::Newest);
    }
}
