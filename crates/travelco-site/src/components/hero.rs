//! Hero carousel for the landing page.

use dioxus::prelude::*;

use crate::content::HERO_SLIDES;
use crate::state::{Route, SiteState};

/// Full-bleed hero slider with autoplay, arrows, and indicator dots.
///
/// The slide index lives in [`crate::state::HeroState`]; the autoplay
/// timer in the root component advances it while unpaused, and every
/// manual control pauses it.
#[component]
pub fn Hero(state: Signal<SiteState>) -> Element {
    let mut state_write = state;
    let hero = state.read().hero;
    let slide = hero.slide();

    rsx! {
        section {
            class: "hero",

            div {
                class: "hero-slide",
                style: "background-image: url('{slide.image}')",

                div { class: "hero-overlay" }

                div {
                    class: "hero-content",

                    span { class: "badge badge-outline hero-badge", "Trending Destinations" }
                    h1 { class: "hero-title", "{slide.title}" }
                    p { class: "hero-subtitle", "{slide.subtitle}" }

                    div {
                        class: "hero-cta",
                        button {
                            class: "btn btn-primary btn-lg",
                            onclick: move |_| {
                                state_write.write().navigate(Route::VisaDirectory)
                            },
                            "Explore Packages"
                        }
                        button { class: "btn btn-ghost btn-lg", "View Destinations" }
                    }
                }
            }

            div {
                class: "hero-controls",

                div {
                    class: "hero-dots",
                    for i in 0..HERO_SLIDES.len() {
                        button {
                            class: if i == hero.index { "hero-dot hero-dot-active" } else { "hero-dot" },
                            onclick: move |_| state_write.write().hero.jump(i),
                        }
                    }
                }

                div {
                    class: "hero-arrows",
                    button {
                        class: "hero-arrow",
                        onclick: move |_| state_write.write().hero.previous(),
                        "‹"
                    }
                    button {
                        class: "hero-arrow",
                        onclick: move |_| state_write.write().hero.next(),
                        "›"
                    }
                }
            }
        }
    }
}
