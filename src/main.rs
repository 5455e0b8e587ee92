mod catalog;
mod config;
mod debounce;
mod logging;
mod search;
mod seo;
mod store;
mod tui;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::{error, info};

use crate::catalog::{default_catalog, load_catalog};
use crate::config::{AppConfig, load_base_config};
use crate::seo::build_structured_data;
use crate::store::QueryStore;
use crate::tui::TuiApp;
use crate::tui::view::TerminalScreen;

#[derive(Parser, Debug, Clone)]
#[command(name = "vitrina", version, about = "Live product catalog search (TUI)")]
struct Cli {
    /// JSON catalog file (built-in demo catalog when omitted)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Debounce delay for committing a search, in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Minimum normalized query length before filtering kicks in
    #[arg(long)]
    min_length: Option<usize>,

    /// Host HTML page to receive the JSON-LD structured-data block
    #[arg(long)]
    page: Option<PathBuf>,

    /// Public URL of the page, for canonical/og:url rewiring
    #[arg(long)]
    page_url: Option<String>,

    /// Override the saved-query store location
    #[arg(long)]
    store: Option<PathBuf>,

    /// Print the catalog's JSON-LD to stdout and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_structured_data: bool,

    /// Log level (error,warn,info,debug,trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn build_config(cli: &Cli) -> AppConfig {
    let mut cfg = load_base_config();
    if let Some(v) = cli.debounce_ms {
        cfg.debounce_delay_ms = v;
    }
    if let Some(v) = cli.min_length {
        cfg.min_search_length = v;
    }
    if cli.catalog.is_some() {
        cfg.catalog_path = cli.catalog.clone();
    }
    if cli.store.is_some() {
        cfg.store_path = cli.store.clone();
    }
    if cli.page.is_some() {
        cfg.page = cli.page.clone();
    }
    if cli.page_url.is_some() {
        cfg.page_url = cli.page_url.clone();
    }
    cfg.log_level = cli.log_level.clone();
    cfg
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level)?;

    let cfg = build_config(&cli);
    info!(?cfg, "app config");

    let catalog = match &cfg.catalog_path {
        Some(path) => load_catalog(path).context("load catalog")?,
        None => default_catalog(),
    };

    if cli.print_structured_data {
        let data = build_structured_data(&catalog, cfg.page_url.as_deref());
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    // Resolve the output surface before wiring anything else; a missing
    // terminal aborts startup here, with no listeners attached.
    let screen = match TerminalScreen::new() {
        Ok(screen) => screen,
        Err(e) => {
            error!(?e, "no usable terminal, aborting");
            return Err(e);
        }
    };

    let store = match &cfg.store_path {
        Some(path) => Some(QueryStore::new(path.clone())),
        None => QueryStore::new_default(),
    };

    let app = TuiApp::new(cfg, catalog, store, Box::new(screen));
    app.run().await
}
