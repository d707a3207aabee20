//! Behavioural properties of the catalog controller, exercised through the
//! public API with an in-memory store and the terminal list surface.

use std::collections::{BTreeSet, HashSet};

use aklatell::logic::{
    PageRender, apply_filters, load_items, render_next_page, set_category, set_sort,
    toggle_favorite,
};
use aklatell::render::{ListSurface, present, present_toggle};
use aklatell::state::{BookId, CatalogConfig, CatalogState, Category, RawBook, SortMode};
use aklatell::storage::{KeyValueStore, MemoryStore};

fn records(json: &str) -> Vec<RawBook> {
    serde_json::from_str(json).expect("valid catalog json")
}

fn sample_catalog() -> Vec<RawBook> {
    records(
        r#"[
        {"id": 1, "title": "Noli Me Tangere", "author": "José Rizal"},
        {"id": "2", "title": "El Filibusterismo", "author": "José Rizal"},
        {"id": 3, "title": "Florante at Laura", "author": "Francisco Balagtas"},
        {"id": 4, "title": "Ibong Adarna", "author": "Anonymous"},
        {"id": 5, "title": "banaag at Sikat", "author": "Lope K. Santos"},
        {"id": 6, "title": "Mga Ibong Mandaragit", "author": "Amado V. Hernandez"},
        {"id": 7, "title": "Dekada '70", "author": "Lualhati Bautista"}
    ]"#,
    )
}

fn ready_state(page_size: usize, raw: Vec<RawBook>) -> CatalogState {
    let mut st = CatalogState::new(
        CatalogConfig {
            page_size,
            ..CatalogConfig::default()
        },
        BTreeSet::new(),
    );
    let _ = load_items(&mut st, raw);
    st
}

#[test]
/// What: Every filtered item contains the term in its title or author
///
/// - Input: Several terms with mixed case and leading or trailing spaces
/// - Output: Each match contains the lower-cased term as typed; non-matches excluded
fn search_returns_only_matching_items() {
    let mut st = ready_state(100, sample_catalog());
    for term in ["rizal", "  IBONG ", " x", "at ", " at", "k. san", "zzz", " ", ""] {
        let _ = apply_filters(&mut st, term);
        let needle = term.to_lowercase();
        for book in &st.filtered {
            assert!(
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle),
                "{:?} does not match {term:?}",
                book.title
            );
        }
        let expected = st
            .all_items
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&needle) || b.author.to_lowercase().contains(&needle)
            })
            .count();
        assert_eq!(st.filtered.len(), expected, "term {term:?}");
    }
}

#[test]
/// What: Surrounding spaces are part of the term
///
/// - Input: One book titled "Ax", terms " x" and "x"
/// - Output: " x" matches nothing; "x" matches the book
fn padded_term_is_matched_literally() {
    let mut st = ready_state(100, records(r#"[{"id":1,"title":"Ax"}]"#));
    let _ = apply_filters(&mut st, " x");
    assert!(st.filtered.is_empty());
    assert_eq!(st.search_term, " x");
    let _ = apply_filters(&mut st, "x");
    assert_eq!(st.filtered.len(), 1);
}

#[test]
/// What: Paging through to exhaustion renders each filtered item exactly once, in order
///
/// - Input: 7 books, page size 3
/// - Output: Pages of 3, 3, 1 then Exhausted; concatenation equals `filtered`
fn paging_renders_everything_once_in_order() {
    let mut st = CatalogState::new(
        CatalogConfig {
            page_size: 3,
            ..CatalogConfig::default()
        },
        BTreeSet::new(),
    );
    let first = load_items(&mut st, sample_catalog()).expect("ready after load");
    let mut surface = ListSurface::new();
    present(&mut surface, &st, &first);

    let mut sizes = vec![surface.len()];
    loop {
        let before = surface.len();
        let update = render_next_page(&mut st);
        present(&mut surface, &st, &update);
        if matches!(update.page, PageRender::Exhausted) {
            break;
        }
        sizes.push(surface.len() - before);
    }
    assert_eq!(sizes, vec![3, 3, 1]);
    assert!(!surface.has_more);

    let shown: Vec<BookId> = surface.cards.iter().map(|c| c.id).collect();
    let expected: Vec<BookId> = st.filtered.iter().map(|b| b.id).collect();
    assert_eq!(shown, expected);
    let unique: HashSet<BookId> = shown.iter().copied().collect();
    assert_eq!(unique.len(), shown.len());
    assert_eq!(st.rendered_count, st.filtered.len());
}

#[test]
/// What: Toggling a favorite twice restores the set and the stored value
///
/// - Input: Existing favorite {4}; toggle 2 twice
/// - Output: Set back to {4}; storage holds `[4]`
fn toggle_twice_is_identity() {
    let mut store = MemoryStore::new();
    store
        .set("aklatell_favorites", "[4]")
        .expect("memory store write");
    let mut st = CatalogState::new(CatalogConfig::default(), BTreeSet::from([BookId(4)]));
    let _ = load_items(&mut st, sample_catalog());
    let before = st.favorites.clone();

    let on = toggle_favorite(&mut st, &mut store, BookId(2));
    assert!(on.is_favorite);
    let off = toggle_favorite(&mut st, &mut store, BookId(2));
    assert!(!off.is_favorite);

    assert_eq!(st.favorites, before);
    assert_eq!(store.get("aklatell_favorites").as_deref(), Some("[4]"));
}

#[test]
/// What: Favorites-only results are a subset of favorites that exist in the catalog
///
/// - Input: Favorites {2, 5, 999}; 999 is not in the catalog
/// - Output: Exactly books 5 and 2, newest first
fn favorites_only_is_subset_of_known_favorites() {
    let favorites = BTreeSet::from([BookId(2), BookId(5), BookId(999)]);
    let mut st = CatalogState::new(CatalogConfig::default(), favorites.clone());
    let _ = load_items(&mut st, sample_catalog());
    let _ = set_category(&mut st, Category::Favorites);

    let known: HashSet<BookId> = st.all_items.iter().map(|b| b.id).collect();
    for book in &st.filtered {
        assert!(favorites.contains(&book.id));
        assert!(known.contains(&book.id));
    }
    let ids: Vec<BookId> = st.filtered.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![BookId(5), BookId(2)]);
}

#[test]
/// What: Title sort is non-decreasing ignoring case, and the source order is untouched
///
/// - Input: Catalog with a lower-case leading title
/// - Output: Titles ordered case-insensitively; `all_items` still newest first
fn title_sort_is_non_decreasing() {
    let mut st = ready_state(100, sample_catalog());
    let _ = set_sort(&mut st, SortMode::Title);
    let keys: Vec<String> = st.filtered.iter().map(|b| b.title.to_lowercase()).collect();
    assert!(keys.windows(2).all(|w| w[0] <= w[1]), "{keys:?}");
    assert_eq!(st.filtered[0].title, "banaag at Sikat");

    let source: Vec<BookId> = st.all_items.iter().map(|b| b.id).collect();
    assert_eq!(source, (1..=7).rev().map(BookId).collect::<Vec<_>>());
}

#[test]
/// What: Favorite Beta, filter to favorites, un-favorite it
///
/// - Input: Alpha/Beta/Gamma with ids 1..3
/// - Output: `["Beta"]`, then an empty result with the no-results state shown
fn favorites_scenario_alpha_beta_gamma() {
    let mut store = MemoryStore::new();
    let mut st = ready_state(
        100,
        records(
            r#"[{"id":1,"title":"Alpha"},{"id":2,"title":"Beta"},{"id":3,"title":"Gamma"}]"#,
        ),
    );
    let mut surface = ListSurface::new();
    let first = apply_filters(&mut st, "").expect("ready");
    present(&mut surface, &st, &first);

    let toggle = toggle_favorite(&mut st, &mut store, BookId(2));
    present_toggle(&mut surface, &st, &toggle);
    let update = set_category(&mut st, Category::Favorites).expect("ready");
    present(&mut surface, &st, &update);
    let titles: Vec<&str> = surface.cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Beta"]);
    assert!(surface.cards[0].is_favorite);

    let toggle = toggle_favorite(&mut st, &mut store, BookId(2));
    assert!(toggle.refiltered.is_some());
    present_toggle(&mut surface, &st, &toggle);
    assert!(st.filtered.is_empty());
    assert!(surface.is_empty());
    assert!(surface.no_results);
    assert!(!surface.has_more);
}

#[test]
/// What: A new filter discards the pages rendered for the previous one
///
/// - Input: Page size 2, load two pages, then search
/// - Output: Surface cleared and restarted at the first page of the new result
fn refilter_discards_stale_pages() {
    let mut st = ready_state(2, sample_catalog());
    let mut surface = ListSurface::new();
    let first = apply_filters(&mut st, "").expect("ready");
    present(&mut surface, &st, &first);
    let more = render_next_page(&mut st);
    present(&mut surface, &st, &more);
    assert_eq!(surface.len(), 4);

    let update = apply_filters(&mut st, "ibong").expect("ready");
    present(&mut surface, &st, &update);
    assert_eq!(st.rendered_count, 2);
    let ids: Vec<BookId> = surface.cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![BookId(6), BookId(4)]);
    assert!(!surface.has_more);
}

#[test]
/// What: Ids are normalized, invalid ids dropped, duplicates keep the first record
///
/// - Input: Numeric, string, float and invalid ids plus a duplicate
/// - Output: Ids 10, 9, 3 in newest-first order; first "3" record wins
fn load_normalizes_and_dedupes_ids() {
    let st = ready_state(
        100,
        records(
            r#"[
            {"id": "3", "title": "First three"},
            {"id": 10, "title": "Ten"},
            {"id": 3, "title": "Second three"},
            {"id": "abc", "title": "Bad"},
            {"title": "Missing"},
            {"id": 9.0, "title": "Nine"}
        ]"#,
        ),
    );
    let ids: Vec<BookId> = st.all_items.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![BookId(10), BookId(9), BookId(3)]);
    assert_eq!(st.all_items[2].title, "First three");
}
