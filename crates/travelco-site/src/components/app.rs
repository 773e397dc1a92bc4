//! Root application component.

use dioxus::prelude::*;

use crate::state::{Route, SiteState};

use super::{DetailPage, DirectoryPage, Footer, Header, HomePage, TopBar};

/// Root component: chrome around the page selected by the current route.
///
/// The active palette and text direction are plain attributes derived from
/// state; the stylesheet does the rest.
#[component]
pub fn App(state: Signal<SiteState>) -> Element {
    let state_read = state.read();
    let dir = state_read.locale.text_direction();
    let theme = state_read.theme.css_value();
    let route = state_read.route.clone();
    drop(state_read);

    rsx! {
        div {
            class: "site",
            dir: "{dir}",
            "data-theme": "{theme}",

            TopBar { state }
            Header { state }

            main {
                class: "site-main",
                {match route {
                    Route::Home => rsx! { HomePage { state } },
                    Route::VisaDirectory => rsx! { DirectoryPage { state } },
                    Route::VisaDetail { .. } => rsx! { DetailPage { state } },
                }}
            }

            Footer { state }
        }
    }
}
