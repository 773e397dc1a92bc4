//! Landing page sections.

use dioxus::prelude::*;

use crate::content::{
    Package, CRUISE_PACKAGES, FEATURED_DESTINATIONS, HOLIDAY_PACKAGES, MEDICAL_PACKAGES,
    POPULAR_CITIES, QUICK_SERVICES, SERVICES, TESTIMONIALS, WHY_CHOOSE_US,
};
use crate::state::{Route, SiteState};

use super::Hero;

/// The landing page: hero plus the stacked marketing sections.
#[component]
pub fn HomePage(state: Signal<SiteState>) -> Element {
    rsx! {
        Hero { state }
        QuickSearch { state }
        ServicesQuick { state }
        FeaturedDestinations {}
        FeaturedPackages {}
        ServicesSection {}
        WhyChooseUs {}
        Testimonials {}
        CtaBanner { state }
    }
}

/// Quick search strip: submits into the visa directory with the query
/// pre-applied.
#[component]
fn QuickSearch(state: Signal<SiteState>) -> Element {
    let mut state_write = state;
    let mut query = use_signal(String::new);
    let strings = state.read().locale.strings();

    rsx! {
        section {
            class: "quick-search",

            div {
                class: "quick-search-card",

                div {
                    class: "quick-search-form",

                    div {
                        class: "quick-search-field",
                        label { class: "field-label", "Destination" }
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: "{strings.search_placeholder}",
                            value: "{query}",
                            oninput: move |evt| query.set(evt.value()),
                        }
                    }

                    button {
                        class: "btn btn-primary quick-search-submit",
                        onclick: move |_| {
                            let q = query();
                            state_write.write().open_directory_with_query(q);
                        },
                        "🔍 {strings.search_button}"
                    }
                }

                div {
                    class: "quick-search-popular",
                    span { class: "popular-label", "Popular:" }
                    for city in POPULAR_CITIES {
                        button {
                            class: "badge badge-secondary popular-chip",
                            onclick: move |_| {
                                state_write.write().open_directory_with_query(city);
                            },
                            "{city}"
                        }
                    }
                }
            }
        }
    }
}

/// Six quick-service tiles; the Visa tile opens the directory.
#[component]
fn ServicesQuick(state: Signal<SiteState>) -> Element {
    let mut state_write = state;

    rsx! {
        section {
            class: "services-quick",
            for tile in QUICK_SERVICES {
                button {
                    class: "service-tile",
                    onclick: move |_| {
                        if tile.opens_visa_directory {
                            state_write.write().navigate(Route::VisaDirectory);
                        }
                    },
                    span { class: "service-tile-glyph", "{tile.glyph}" }
                    span { class: "service-tile-title", "{tile.title}" }
                }
            }
        }
    }
}

/// Featured destinations bento grid.
#[component]
fn FeaturedDestinations() -> Element {
    rsx! {
        section {
            class: "destinations",

            div {
                class: "section-heading",
                h2 { "Top Destinations" }
                p { class: "section-subtitle", "Handpicked places loved by our travelers" }
            }

            div {
                class: "bento-grid",
                for destination in FEATURED_DESTINATIONS {
                    div {
                        class: "bento-cell {destination.span_class}",
                        style: "background-image: url('{destination.image}')",

                        div { class: "bento-overlay" }
                        div {
                            class: "bento-caption",
                            span { class: "badge badge-secondary", "{destination.tag}" }
                            h3 { class: "bento-title", "{destination.title}" }
                        }
                    }
                }
            }
        }
    }
}

/// Tab groups for the featured package offers.
#[derive(Clone, Copy, PartialEq, Eq)]
enum PackageTab {
    Holidays,
    Cruises,
    Medical,
}

impl PackageTab {
    fn label(&self) -> &'static str {
        match self {
            PackageTab::Holidays => "Holidays",
            PackageTab::Cruises => "Cruises",
            PackageTab::Medical => "Medical",
        }
    }

    fn packages(&self) -> &'static [Package] {
        match self {
            PackageTab::Holidays => &HOLIDAY_PACKAGES,
            PackageTab::Cruises => &CRUISE_PACKAGES,
            PackageTab::Medical => &MEDICAL_PACKAGES,
        }
    }

    fn all() -> &'static [PackageTab] {
        &[PackageTab::Holidays, PackageTab::Cruises, PackageTab::Medical]
    }
}

/// Featured packages section with holidays/cruises/medical tabs.
#[component]
fn FeaturedPackages() -> Element {
    let mut tab = use_signal(|| PackageTab::Holidays);
    let current = tab();

    rsx! {
        section {
            class: "packages",

            div {
                class: "section-heading",
                h2 { "Featured Packages" }
                p { class: "section-subtitle", "Limited-time offers curated by our experts" }
            }

            div {
                class: "tabs",
                for t in PackageTab::all() {
                    button {
                        class: if *t == current { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(*t),
                        "{t.label()}"
                    }
                }
            }

            div {
                class: "package-grid",
                for package in current.packages() {
                    div {
                        class: "package-card",
                        div {
                            class: "package-image",
                            style: "background-image: url('{package.image}')",
                        }
                        div {
                            class: "package-body",
                            h3 { class: "package-title", "{package.title}" }
                            span { class: "package-price", "From QAR {package.price}" }
                        }
                    }
                }
            }
        }
    }
}

/// Four service cards.
#[component]
fn ServicesSection() -> Element {
    rsx! {
        section {
            class: "services",

            div {
                class: "section-heading",
                h2 { "Our Services" }
            }

            div {
                class: "service-card-grid",
                for service in SERVICES {
                    div {
                        class: "service-card",
                        span { class: "service-card-glyph", "{service.glyph}" }
                        h3 { class: "service-card-title", "{service.title}" }
                        p { class: "service-card-blurb", "{service.blurb}" }
                    }
                }
            }
        }
    }
}

/// Why-choose-us accordion; one item open at a time.
#[component]
fn WhyChooseUs() -> Element {
    let mut open = use_signal(|| Some(0usize));
    let current = open();

    rsx! {
        section {
            class: "why-us",

            div {
                class: "section-heading",
                h2 { "Why Choose Us" }
            }

            div {
                class: "accordion",
                for (i, item) in WHY_CHOOSE_US.iter().enumerate() {
                    div {
                        class: "accordion-item",

                        button {
                            class: "accordion-trigger",
                            onclick: move |_| {
                                let next = if current == Some(i) { None } else { Some(i) };
                                open.set(next);
                            },
                            span { "{item.question}" }
                            span {
                                class: "accordion-chevron",
                                if current == Some(i) { "−" } else { "+" }
                            }
                        }

                        if current == Some(i) {
                            div { class: "accordion-content", "{item.answer}" }
                        }
                    }
                }
            }
        }
    }
}

/// Customer testimonials.
#[component]
fn Testimonials() -> Element {
    rsx! {
        section {
            class: "testimonials",

            div {
                class: "section-heading",
                h2 { "What Travelers Say" }
            }

            div {
                class: "testimonial-grid",
                for quote in TESTIMONIALS {
                    div {
                        class: "testimonial-card",
                        p { class: "testimonial-text", "\u{201c}{quote.text}\u{201d}" }
                        div {
                            class: "testimonial-footer",
                            img { class: "testimonial-avatar", src: "{quote.avatar}", alt: "{quote.name}" }
                            div {
                                span { class: "testimonial-name", "{quote.name}" }
                                span { class: "testimonial-place", "{quote.place}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Closing call-to-action banner.
#[component]
fn CtaBanner(state: Signal<SiteState>) -> Element {
    let mut state_write = state;
    let strings = state.read().locale.strings();

    rsx! {
        section {
            class: "cta-banner",
            h2 { class: "cta-title", "Ready for your next trip?" }
            p { class: "cta-subtitle", "Visas, flights, hotels, and cruises under one roof." }
            button {
                class: "btn btn-primary btn-lg",
                onclick: move |_| state_write.write().navigate(Route::VisaDirectory),
                "{strings.nav_visa}"
            }
        }
    }
}
