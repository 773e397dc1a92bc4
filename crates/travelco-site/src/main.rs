//! Entry point for the TravelCo site.
//!
//! This Dioxus desktop application renders the TravelCo landing page and
//! visa directory. The country directory is loaded once at startup, either
//! from the built-in dataset or from a JSON file given on the command line,
//! and never changes afterwards.

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tokio::time::{sleep, Duration};

use travelco_directory::Directory;
use travelco_site::components::App;
use travelco_site::i18n::Locale;
use travelco_site::state::SiteState;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Seconds between autoplay advances of the hero carousel.
const HERO_INTERVAL_SECS: u64 = 6;

/// Global storage for the loaded directory.
static DIRECTORY: OnceLock<Directory> = OnceLock::new();

/// Global storage for the startup locale.
static LOCALE: OnceLock<Locale> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "travelco-site")]
#[command(about = "TravelCo marketing site and visa directory")]
struct Args {
    /// Interface language tag (en or ar; unknown tags fall back to en)
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Path to a JSON file with country records (uses the built-in list if not provided)
    #[arg(short, long)]
    directory: Option<PathBuf>,

    /// Start with a maximized window
    #[arg(long)]
    maximized: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();

    // Populate the directory once; it is read-only for the process lifetime.
    let directory = match &args.directory {
        Some(path) => Directory::from_json_file(path)
            .with_context(|| format!("loading country directory from {}", path.display()))?,
        None => Directory::builtin(),
    };
    tracing::info!(countries = directory.len(), "Starting TravelCo site");

    DIRECTORY.set(directory).ok();
    LOCALE.set(Locale::from_tag(&args.locale)).ok();

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("TravelCo - Travel & Visa Services")
                        .with_inner_size(LogicalSize::new(1440, 900))
                        .with_maximized(args.maximized),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Plus+Jakarta+Sans:wght@400;600;700;800&family=Noto+Kufi+Arabic:wght@400;600&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(RootApp);

    Ok(())
}

/// Root component: owns the site state and drives hero autoplay.
#[component]
fn RootApp() -> Element {
    let state = use_signal(|| {
        let directory = DIRECTORY.get().cloned().unwrap_or_else(Directory::builtin);
        let locale = LOCALE.get().copied().unwrap_or_default();
        SiteState::new(directory, locale)
    });

    // Advance the hero carousel while autoplay is not paused.
    let _autoplay = use_future(move || {
        let mut state = state;

        async move {
            loop {
                sleep(Duration::from_secs(HERO_INTERVAL_SECS)).await;
                if !state.peek().hero.paused {
                    state.write().hero.advance();
                }
            }
        }
    });

    rsx! {
        App { state }
    }
}
