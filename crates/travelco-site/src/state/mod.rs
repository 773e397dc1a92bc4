//! View state for the TravelCo site.

pub mod hero_state;
pub mod site_state;

pub use hero_state::*;
pub use site_state::*;
