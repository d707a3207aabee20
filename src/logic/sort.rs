use std::cmp::Ordering;

use crate::state::{BookItem, SortMode};

/// What: Compare two strings case-insensitively, falling back to the raw text.
///
/// Inputs:
/// - `a`, `b`: Strings to compare
///
/// Output:
/// - Ordering by lower-cased text; raw byte order breaks case-only ties.
fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// What: Sort `items` in place according to `mode`.
///
/// Inputs:
/// - `items`: Books in canonical (newest-first) order
/// - `mode`: Requested sort key
///
/// Output:
/// - `items` reordered; equal keys keep their incoming relative order.
///
/// Details:
/// - `sort_by` is stable, so ties fall back to canonical order.
pub fn sort_items(items: &mut [BookItem], mode: SortMode) {
    match mode {
        SortMode::Newest => items.sort_by(|a, b| b.id.cmp(&a.id)),
        SortMode::Title => items.sort_by(|a, b| text_cmp(&a.title, &b.title)),
        SortMode::Author => items.sort_by(|a, b| text_cmp(&a.author, &b.author)),
    }
}
