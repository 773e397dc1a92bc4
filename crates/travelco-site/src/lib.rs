//! TravelCo marketing site
//!
//! This crate provides a Dioxus desktop application rendering the TravelCo
//! landing page and the visa-information directory over an injected,
//! immutable [`travelco_directory::Directory`].

pub mod components;
pub mod content;
pub mod i18n;
pub mod state;
pub mod theme;
