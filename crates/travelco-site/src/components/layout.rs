//! Site chrome: top contact bar, header with navigation, footer.

use dioxus::prelude::*;

use crate::state::{Route, SiteState};

/// Top contact strip above the header.
#[component]
pub fn TopBar(state: Signal<SiteState>) -> Element {
    let strings = state.read().locale.strings();

    rsx! {
        div {
            class: "topbar",

            div {
                class: "topbar-contacts",
                span { class: "topbar-item", "☎ +974 5555 5555" }
                span { class: "topbar-item", "✉ hello@travelco.com" }
                span { class: "topbar-item", "📍 Doha, Qatar" }
            }

            span { class: "badge badge-secondary", "{strings.support_badge}" }
        }
    }
}

/// Sticky header with brand, navigation, and the language/theme switchers.
#[component]
pub fn Header(state: Signal<SiteState>) -> Element {
    let mut state_write = state;
    let state_read = state.read();
    let strings = state_read.locale.strings();

    // Nav labels come from the localization provider; targets are routes.
    let nav: Vec<(&'static str, Route)> = vec![
        (strings.nav_home, Route::Home),
        (strings.nav_destinations, Route::Home),
        (strings.nav_cruises, Route::Home),
        (strings.nav_medical, Route::Home),
        (strings.nav_visa, Route::VisaDirectory),
        (strings.nav_about, Route::Home),
        (strings.nav_contact, Route::Home),
    ];
    let book_now = strings.book_now;
    let switch_language = strings.switch_language;
    let theme_glyph = state_read.theme.toggle_glyph();
    drop(state_read);

    rsx! {
        header {
            class: "header",

            div {
                class: "header-brand",
                onclick: move |_| state_write.write().navigate(Route::Home),
                img {
                    class: "header-logo",
                    src: "https://images.unsplash.com/photo-1526778548025-fa2f459cd5c1?q=80&w=400&auto=format&fit=crop",
                    alt: "TravelCo Logo",
                }
                span { class: "header-title", "TravelCo" }
            }

            nav {
                class: "header-nav",
                for (label, route) in nav {
                    a {
                        class: "nav-link",
                        onclick: move |_| state_write.write().navigate(route.clone()),
                        "{label}"
                    }
                }
            }

            div {
                class: "header-actions",

                button {
                    class: "btn btn-outline btn-language",
                    onclick: move |_| state_write.write().toggle_locale(),
                    "🌐 {switch_language}"
                }

                button {
                    class: "btn btn-outline btn-theme",
                    onclick: move |_| state_write.write().toggle_theme(),
                    "{theme_glyph}"
                }

                button { class: "btn btn-primary", "{book_now}" }
            }
        }
    }
}

/// Site footer.
#[component]
pub fn Footer(state: Signal<SiteState>) -> Element {
    let mut state_write = state;
    let strings = state.read().locale.strings();

    rsx! {
        footer {
            class: "footer",

            div {
                class: "footer-columns",

                div {
                    class: "footer-column",
                    h3 { class: "footer-brand", "TravelCo" }
                    p {
                        class: "footer-blurb",
                        "Your Qatar-based partner for holidays, cruises, medical travel, and visas."
                    }
                }

                div {
                    class: "footer-column",
                    h4 { "{strings.nav_visa}" }
                    a {
                        class: "footer-link",
                        onclick: move |_| {
                            state_write.write().navigate(crate::state::Route::VisaDirectory)
                        },
                        "{strings.nav_visa}"
                    }
                }

                div {
                    class: "footer-column",
                    h4 { "{strings.nav_contact}" }
                    p { class: "footer-contact", "+974 5555 5555" }
                    p { class: "footer-contact", "hello@travelco.com" }
                    p { class: "footer-contact", "Doha, Qatar" }
                }
            }

            div {
                class: "footer-bottom",
                "© 2026 TravelCo. All rights reserved."
            }
        }
    }
}
