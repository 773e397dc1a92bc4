//! Main application state for the site.

use travelco_directory::{CountryRecord, Directory, FilterState};

use crate::i18n::Locale;
use crate::theme::Theme;

use super::HeroState;

/// Maximum number of entries shown in the search suggestion dropdown.
const MAX_SUGGESTIONS: usize = 8;

/// Which page is currently shown.
///
/// Navigation is a plain state write; the detail page re-looks-up its
/// record by slug on every render, so the slug is the only thing carried
/// across the navigation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    VisaDirectory,
    VisaDetail { slug: String },
}

/// All mutable view state, owned by a single Dioxus signal.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteState {
    /// The injected, read-only country directory.
    pub directory: Directory,

    /// Current page.
    pub route: Route,

    /// Directory search inputs (query text + region selection).
    pub filter: FilterState,

    /// Active interface language.
    pub locale: Locale,

    /// Active color palette.
    pub theme: Theme,

    /// Hero carousel position.
    pub hero: HeroState,
}

impl SiteState {
    /// Creates the initial state on the landing page.
    pub fn new(directory: Directory, locale: Locale) -> Self {
        Self {
            directory,
            route: Route::Home,
            filter: FilterState::default(),
            locale,
            theme: Theme::default(),
            hero: HeroState::new(),
        }
    }

    /// Navigates to a page.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(?route, "navigate");
        self.route = route;
    }

    /// Opens the visa directory with a query pre-applied (quick search).
    ///
    /// Any filter left over from an earlier visit is cleared first, so the
    /// quick search always runs against the full directory; a region picked
    /// last time must not silently empty this result.
    pub fn open_directory_with_query(&mut self, query: impl Into<String>) {
        self.filter.clear();
        self.filter.query = query.into();
        self.navigate(Route::VisaDirectory);
    }

    /// Opens the detail page for a country slug.
    pub fn open_country(&mut self, slug: impl Into<String>) {
        self.navigate(Route::VisaDetail { slug: slug.into() });
    }

    /// Derives the filtered directory view for the current inputs.
    pub fn visible_countries(&self) -> Vec<&CountryRecord> {
        self.filter.apply(self.directory.records())
    }

    /// The filtered view truncated for the suggestion dropdown.
    pub fn search_suggestions(&self) -> Vec<&CountryRecord> {
        let mut matches = self.visible_countries();
        matches.truncate(MAX_SUGGESTIONS);
        matches
    }

    /// Resolves the record shown on the detail page.
    ///
    /// An unknown slug silently renders the first record in the directory,
    /// matching the navigation behavior of the original site. Outside the
    /// detail route this returns the first record as well; components only
    /// call it while `Route::VisaDetail` is active.
    pub fn detail_record(&self) -> &CountryRecord {
        match &self.route {
            Route::VisaDetail { slug } => self.directory.resolve_or_first(slug),
            _ => &self.directory.records()[0],
        }
    }

    /// Switches between the two interface languages.
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
        tracing::debug!(locale = ?self.locale, "locale switched");
    }

    /// Switches between the two color palettes.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = ?self.theme, "theme switched");
    }
}

#[cfg(test)]
mod tests {
    use travelco_directory::{Region, RegionFilter};

    use super::*;

    fn state() -> SiteState {
        SiteState::new(Directory::builtin(), Locale::En)
    }

    #[test]
    fn starts_on_home_with_empty_filter() {
        let state = state();
        assert_eq!(state.route, Route::Home);
        assert_eq!(state.filter, FilterState::default());
        assert_eq!(state.visible_countries().len(), state.directory.len());
    }

    #[test]
    fn quick_search_opens_directory_with_query() {
        let mut state = state();
        state.open_directory_with_query("tur");

        assert_eq!(state.route, Route::VisaDirectory);
        let visible = state.visible_countries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Turkey");
    }

    #[test]
    fn quick_search_discards_stale_region_filter() {
        let mut state = state();

        // Browse the directory filtered to Asia, go back home, then quick
        // search for a European country.
        state.filter.region = RegionFilter::Only(Region::Asia);
        state.navigate(Route::Home);
        state.open_directory_with_query("turkey");

        assert_eq!(state.filter.region, RegionFilter::All);
        let visible = state.visible_countries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Turkey");
    }

    #[test]
    fn region_and_query_combine() {
        let mut state = state();
        state.filter.query = "united".to_string();
        state.filter.region = RegionFilter::Only(Region::Europe);

        let names: Vec<&str> = state
            .visible_countries()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["United Kingdom"]);
    }

    #[test]
    fn suggestions_are_capped() {
        let state = state();
        assert!(state.search_suggestions().len() <= 8);
        assert_eq!(state.search_suggestions().len(), 8);
    }

    #[test]
    fn detail_record_resolves_by_slug() {
        let mut state = state();
        state.open_country("japan");
        assert_eq!(state.detail_record().name, "Japan");
    }

    #[test]
    fn unknown_slug_falls_back_to_first_record() {
        let mut state = state();
        state.open_country("atlantis");

        assert_eq!(
            state.route,
            Route::VisaDetail { slug: "atlantis".to_string() }
        );
        assert_eq!(state.detail_record().name, "Qatar");
    }

    #[test]
    fn locale_toggles_both_ways() {
        let mut state = state();
        state.toggle_locale();
        assert_eq!(state.locale, Locale::Ar);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::En);
    }

    #[test]
    fn theme_toggles_both_ways() {
        use crate::theme::Theme;

        let mut state = state();
        assert_eq!(state.theme, Theme::Daylight);
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Dusk);
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Daylight);
    }
}
