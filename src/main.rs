#![deny(unsafe_code)]

mod common;
mod config;
mod editor;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{Level as TraceLevel, warn};
use tracing_subscriber::FmtSubscriber;

use crate::config::CardConfig;
use crate::editor::Page;

#[derive(Parser)]
#[command(
    name = "weather-card-editor",
    version,
    about = "Configuration editor for the weather dashboard card",
    long_about = None
)]
struct Cli {
    /// Path to the card configuration JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page to open the editor on: main, forecast, units or alternate
    #[arg(long)]
    page: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(TraceLevel::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(CardConfig::default_path);

    let page = match cli.page.as_deref() {
        Some(name) => Page::from_name(name).unwrap_or_else(|| {
            warn!(page = %name, "Unknown page name, opening the main page");
            Page::Main
        }),
        None => Page::Main,
    };

    editor::run_editor(config_path, page)
}
