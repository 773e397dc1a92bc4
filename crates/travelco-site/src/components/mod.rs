//! UI components for the TravelCo site.

mod app;
mod detail_page;
mod directory_page;
mod hero;
mod home;
mod layout;

pub use app::*;
pub use detail_page::*;
pub use directory_page::*;
pub use hero::*;
pub use home::*;
pub use layout::*;
