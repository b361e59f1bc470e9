use std::path::PathBuf;
use std::sync::Arc;

use crate::color::CoverPalette;
use crate::data::loader::load_file;
use crate::data::model::{Book, Catalogue, Facet, YearRange};
use crate::data::search::{search, SearchRequest, SearchResults};
use crate::data::sort::SortMode;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Every intent method updates the request and re-runs the search, so
/// `results` always reflects `request`.
pub struct AppState {
    /// Loaded catalogue (None until a file loads successfully).
    pub catalogue: Option<Arc<Catalogue>>,

    /// Where the current catalogue came from.
    pub source: Option<PathBuf>,

    /// Filters, sort mode, and page as last requested.
    pub request: Option<SearchRequest>,

    /// Output of the last search (cached).
    pub results: SearchResults,

    /// Catalogue index of the book shown in the detail window.
    pub selected: Option<usize>,

    /// Card cover colours.
    pub palette: Option<CoverPalette>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalogue: None,
            source: None,
            request: None,
            results: SearchResults::default(),
            selected: None,
            palette: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Load a catalogue file, replacing the current one. A failure (including
    /// a file with no records) leaves no catalogue and a status message.
    pub fn load_from(&mut self, path: PathBuf) {
        match load_file(&path) {
            Ok(catalogue) if catalogue.is_empty() => {
                log::error!("{} contains no records", path.display());
                self.set_load_error("Database is empty or could not be loaded.".to_string());
            }
            Ok(catalogue) => {
                log::info!(
                    "Loaded {} books from {} with columns {:?}",
                    catalogue.len(),
                    path.display(),
                    catalogue.columns()
                );
                self.set_catalogue(catalogue, path);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.set_load_error(format!("Error loading database: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded catalogue, resetting every selection.
    pub fn set_catalogue(&mut self, catalogue: Catalogue, source: PathBuf) {
        if catalogue.year_bounds().is_none() {
            log::warn!("{} has no parseable years; year filter disabled", source.display());
        }
        self.request = Some(SearchRequest::for_catalogue(&catalogue));
        self.palette = Some(CoverPalette::new(&catalogue));
        self.catalogue = Some(Arc::new(catalogue));
        self.source = Some(source);
        self.selected = None;
        self.status_message = None;
        self.refresh();
    }

    /// Drop the current catalogue after a failed load.
    pub fn set_load_error(&mut self, message: String) {
        self.catalogue = None;
        self.request = None;
        self.results = SearchResults::default();
        self.selected = None;
        self.palette = None;
        self.status_message = Some(message);
    }

    /// Re-run the search pipeline and store the clamped page back.
    pub fn refresh(&mut self) {
        if let (Some(cat), Some(req)) = (&self.catalogue, &mut self.request) {
            self.results = search(cat, req);
            req.page = self.results.page;
        }
    }

    fn update(&mut self, f: impl FnOnce(&mut SearchRequest)) {
        if let Some(req) = &mut self.request {
            f(req);
            self.refresh();
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.update(|req| req.filters.query = query.to_string());
    }

    /// Toggle a single value in a facet's selection.
    pub fn toggle_facet(&mut self, facet: Facet, value: &str) {
        self.update(|req| {
            let selected = req.filters.facets.entry(facet).or_default();
            if !selected.remove(value) {
                selected.insert(value.to_string());
            }
        });
    }

    /// Clear a facet's selection (no restriction).
    pub fn clear_facet(&mut self, facet: Facet) {
        self.update(|req| {
            req.filters.facets.remove(&facet);
        });
    }

    pub fn set_year_range(&mut self, range: YearRange) {
        self.update(|req| req.filters.years = Some(range));
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.update(|req| req.sort = sort);
    }

    pub fn next_page(&mut self) {
        self.update(|req| req.page += 1);
    }

    pub fn prev_page(&mut self) {
        self.update(|req| req.page = req.page.saturating_sub(1));
    }

    /// Show a book in the detail window.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_book(&self) -> Option<&Book> {
        let cat = self.catalogue.as_ref()?;
        cat.get(self.selected?)
    }
}
