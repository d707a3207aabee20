//! Terminal application state composed around the catalog controller.

use std::time::Instant;

use ratatui::widgets::ListState;

use super::catalog::CatalogState;
use super::types::RawBook;
use crate::logic::{self, SearchDebouncer};
use crate::render::{self, DisplaySurface, ListSurface};
use crate::sources::LoadError;
use crate::storage::{
    KeyValueStore, ThemePreference, load_favorites, load_theme_preference, save_theme_preference,
};
use crate::theme::{Settings, Theme};

/// Global application state for the terminal UI.
pub struct AppState {
    /// The catalog list controller.
    pub catalog: CatalogState,
    /// Local key-value store (favorites, theme).
    pub store: Box<dyn KeyValueStore + Send>,
    /// What the results pane shows.
    pub surface: ListSurface,
    /// Search box contents as typed.
    pub input: String,
    /// Coalesces keystrokes into filter recomputes.
    pub debouncer: SearchDebouncer,
    /// Selected index into `surface.cards`.
    pub selected: usize,
    /// ratatui list state mirroring `selected`.
    pub list_state: ListState,
    /// Light/dark preference.
    pub theme_pref: ThemePreference,
    /// Storage key of `theme_pref`.
    pub theme_key: String,
    /// Catalog source shown in the title.
    pub source: String,
    /// One-line feedback shown in the footer.
    pub toast: Option<String>,
}

impl AppState {
    /// What: Build the initial state from settings and an opened store.
    ///
    /// Inputs:
    /// - `settings`: Effective settings (file + CLI overrides)
    /// - `store`: Key-value store to read favorites/theme from and persist to
    ///
    /// Output:
    /// - State in `Loading` with favorites and theme already restored.
    pub fn new(settings: &Settings, mut store: Box<dyn KeyValueStore + Send>) -> Self {
        let favorites = load_favorites(&mut *store, &settings.favorites_key);
        let theme_pref = load_theme_preference(&*store, &settings.theme_key);
        let mut catalog = CatalogState::new(settings.catalog_config(), favorites);
        catalog.sort_mode = settings.sort_mode;
        Self {
            catalog,
            store,
            surface: ListSurface::new(),
            input: String::new(),
            debouncer: SearchDebouncer::new(settings.search_debounce),
            selected: 0,
            list_state: ListState::default(),
            theme_pref,
            theme_key: settings.theme_key.clone(),
            source: settings.catalog_source.clone(),
            toast: None,
        }
    }

    /// Palette for the current preference.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        Theme::for_preference(self.theme_pref)
    }

    /// Keep `selected` within the rendered cards and mirror it into `list_state`.
    fn clamp_selection(&mut self) {
        if self.surface.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(self.surface.len() - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// What: Install the outcome of the catalog fetch.
    ///
    /// Inputs:
    /// - `result`: Records or the fetch error
    ///
    /// Output:
    /// - First page shown, or the error shown inline. Any search typed while loading
    ///   is applied right away.
    pub fn finish_load(&mut self, result: Result<Vec<RawBook>, LoadError>) {
        match result {
            Ok(records) => {
                let _ = self.debouncer.flush();
                if let Some(update) =
                    logic::load_items_with_term(&mut self.catalog, records, &self.input)
                {
                    render::present(&mut self.surface, &self.catalog, &update);
                }
            }
            Err(e) => {
                let message = format!("Failed to load books: {e}");
                logic::load_failed(&mut self.catalog, message.clone());
                self.surface.show_error(&message);
            }
        }
        self.selected = 0;
        self.clamp_selection();
    }

    /// Recompute the view for `term` and reset the selection to the top.
    pub fn apply_search(&mut self, term: &str) {
        if let Some(update) = logic::apply_filters(&mut self.catalog, term) {
            render::present(&mut self.surface, &self.catalog, &update);
        }
        self.selected = 0;
        self.clamp_selection();
    }

    /// Record a change of the search box; the filter runs once input goes quiet.
    pub fn on_input_changed(&mut self, now: Instant) {
        self.debouncer.note_input(&self.input, now);
    }

    /// Apply the search box contents right away (Enter, Esc), dropping any pending term.
    pub fn submit_search(&mut self) {
        let _ = self.debouncer.flush();
        let term = self.input.clone();
        self.apply_search(&term);
    }

    /// Periodic housekeeping: release a debounced search.
    pub fn tick(&mut self, now: Instant) {
        if let Some(term) = self.debouncer.poll(now) {
            self.apply_search(&term);
        }
    }

    /// What: Append the next page to the results pane.
    ///
    /// Output:
    /// - `true` when cards were appended.
    pub fn load_more(&mut self) -> bool {
        if !self.catalog.is_ready() {
            return false;
        }
        let before = self.surface.len();
        let update = logic::render_next_page(&mut self.catalog);
        render::present(&mut self.surface, &self.catalog, &update);
        self.clamp_selection();
        self.surface.len() > before
    }

    /// What: Move the selection by `delta`, loading the next page at the bottom edge.
    ///
    /// Inputs:
    /// - `delta`: Signed step (negative moves up)
    pub fn move_selection(&mut self, delta: isize) {
        if self.surface.is_empty() {
            return;
        }
        let last = self.surface.len() - 1;
        let target = self.selected.saturating_add_signed(delta);
        if target > last && self.surface.has_more && self.load_more() {
            self.selected = target.min(self.surface.len() - 1);
        } else {
            self.selected = target.min(last);
        }
        self.list_state.select(Some(self.selected));
    }

    /// Toggle the favorite state of the selected card.
    pub fn toggle_selected_favorite(&mut self) {
        let Some(id) = self.surface.get(self.selected).map(|c| c.id) else {
            return;
        };
        let toggle = logic::toggle_favorite(&mut self.catalog, &mut *self.store, id);
        render::present_toggle(&mut self.surface, &self.catalog, &toggle);
        let title = self
            .catalog
            .book(id)
            .map_or_else(|| id.to_string(), |b| b.title.clone());
        self.toast = Some(if toggle.is_favorite {
            format!("Added \"{title}\" to favorites")
        } else {
            format!("Removed \"{title}\" from favorites")
        });
        if toggle.refiltered.is_some() {
            self.clamp_selection();
        }
    }

    /// Switch to the next sort mode.
    pub fn cycle_sort(&mut self) {
        let next = self.catalog.sort_mode.next();
        if let Some(update) = logic::set_sort(&mut self.catalog, next) {
            render::present(&mut self.surface, &self.catalog, &update);
        }
        self.selected = 0;
        self.clamp_selection();
    }

    /// Switch between all books and favorites only.
    pub fn toggle_category(&mut self) {
        let next = self.catalog.category.toggled();
        if let Some(update) = logic::set_category(&mut self.catalog, next) {
            render::present(&mut self.surface, &self.catalog, &update);
        }
        self.selected = 0;
        self.clamp_selection();
    }

    /// Flip light/dark and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.theme_pref = self.theme_pref.toggled();
        if let Err(e) = save_theme_preference(&mut *self.store, &self.theme_key, self.theme_pref)
        {
            tracing::warn!(error = %e, "[Theme] Failed to persist theme preference");
        }
    }
}
