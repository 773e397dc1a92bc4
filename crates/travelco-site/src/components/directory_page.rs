//! Visa directory page: search, region tabs, country grid.

use dioxus::prelude::*;

use travelco_directory::{Region, RegionFilter};

use crate::content::DIRECTORY_BANNER_IMAGE;
use crate::state::SiteState;

/// A country card's display data, detached from the directory borrow.
#[derive(Clone, PartialEq)]
struct CardData {
    flag: String,
    name: String,
    region: &'static str,
    slug: String,
}

/// The visa directory: banner with search, region tab row, and the
/// filtered country grid. The grid is re-derived from the directory on
/// every input change; an empty result renders an explicit empty state.
#[component]
pub fn DirectoryPage(state: Signal<SiteState>) -> Element {
    let mut state_write = state;
    let state_read = state.read();
    let strings = state_read.locale.strings();
    let query = state_read.filter.query.clone();
    let region = state_read.filter.region;

    let cards: Vec<CardData> = state_read
        .visible_countries()
        .into_iter()
        .map(|record| CardData {
            flag: record.flag.clone(),
            name: record.name.clone(),
            region: record.region.label(),
            slug: record.slug.clone(),
        })
        .collect();

    let suggestions: Vec<CardData> = state_read
        .search_suggestions()
        .into_iter()
        .map(|record| CardData {
            flag: record.flag.clone(),
            name: record.name.clone(),
            region: record.region.label(),
            slug: record.slug.clone(),
        })
        .collect();
    drop(state_read);

    let show_suggestions = !query.trim().is_empty() && !suggestions.is_empty();

    rsx! {
        div {
            class: "directory",

            // Banner with search and region filters
            section {
                class: "directory-banner",
                style: "background-image: url('{DIRECTORY_BANNER_IMAGE}')",

                div { class: "directory-banner-overlay" }

                div {
                    class: "directory-banner-content",

                    span { class: "badge badge-secondary", "🌐 {strings.nav_visa}" }
                    h1 { class: "directory-title", "Find visa info for any country" }
                    p {
                        class: "directory-subtitle",
                        "Search by country and filter by region. Click a country card to view requirements, processing time, and how to enquire."
                    }

                    div {
                        class: "directory-search",
                        input {
                            class: "input directory-search-input",
                            r#type: "text",
                            placeholder: "{strings.search_placeholder}",
                            value: "{query}",
                            oninput: move |evt| {
                                state_write.write().filter.query = evt.value();
                            },
                        }

                        if show_suggestions {
                            div {
                                class: "search-suggestions",
                                for suggestion in suggestions {
                                    button {
                                        class: "search-suggestion",
                                        onclick: {
                                            let slug = suggestion.slug.clone();
                                            move |_| state_write.write().open_country(slug.clone())
                                        },
                                        span { class: "suggestion-flag", "{suggestion.flag}" }
                                        span { class: "suggestion-name", "{suggestion.name}" }
                                        span { class: "badge badge-secondary", "{suggestion.region}" }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "region-tabs",

                        button {
                            class: if region == RegionFilter::All { "tab tab-active" } else { "tab" },
                            onclick: move |_| {
                                state_write.write().filter.region = RegionFilter::All;
                            },
                            "{strings.all_regions}"
                        }

                        for r in Region::all() {
                            button {
                                class: if region == RegionFilter::Only(*r) { "tab tab-active" } else { "tab" },
                                onclick: move |_| {
                                    state_write.write().filter.region = RegionFilter::Only(*r);
                                },
                                "{r.label()}"
                            }
                        }
                    }
                }
            }

            // Country grid
            section {
                class: "directory-grid-section",

                if cards.is_empty() {
                    div {
                        class: "empty-state",
                        span { class: "empty-state-glyph", "🔍" }
                        p { "{strings.no_results}" }
                    }
                } else {
                    div {
                        class: "country-grid",
                        for card in cards {
                            CountryCard { state, card }
                        }
                    }
                }
            }
        }
    }
}

/// One clickable country card in the grid.
#[component]
fn CountryCard(state: Signal<SiteState>, card: CardData) -> Element {
    let mut state_write = state;
    let slug = card.slug.clone();

    rsx! {
        button {
            class: "country-card",
            onclick: move |_| state_write.write().open_country(slug.clone()),

            span { class: "country-card-flag", "{card.flag}" }
            div {
                class: "country-card-text",
                span { class: "country-card-name", "{card.name}" }
                span { class: "country-card-region", "{card.region}" }
            }
        }
    }
}
