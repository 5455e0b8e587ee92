use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 250;
pub const DEFAULT_MIN_SEARCH_LENGTH: usize = 2;
const CONFIG_DIR: &str = "vitrina";
const CONFIG_FILE: &str = "config.toml";

/// Resolved application configuration: defaults, overlaid by the optional
/// config file, overlaid by CLI flags.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Quiescence window before a keystroke burst commits a search.
    pub debounce_delay_ms: u64,
    /// Queries shorter than this (after normalization) pass the catalog
    /// through unfiltered.
    pub min_search_length: usize,
    /// Optional JSON catalog file; the built-in catalog is used otherwise.
    pub catalog_path: Option<PathBuf>,
    /// Override for the query store location.
    pub store_path: Option<PathBuf>,
    /// Host HTML page receiving the structured-data block.
    pub page: Option<PathBuf>,
    /// Public URL of that page, for canonical/og:url rewiring.
    pub page_url: Option<String>,
    /// Log verbosity; CLI-only, the subscriber is installed before the
    /// config file is read.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            min_search_length: DEFAULT_MIN_SEARCH_LENGTH,
            catalog_path: None,
            store_path: None,
            page: None,
            page_url: None,
            log_level: "info".to_string(),
        }
    }
}

/// On-disk shape of the config file; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub debounce_delay_ms: Option<u64>,
    pub min_search_length: Option<usize>,
    pub catalog_path: Option<PathBuf>,
    pub store_path: Option<PathBuf>,
    pub page: Option<PathBuf>,
    pub page_url: Option<String>,
}

impl AppConfig {
    /// Overlay values from a parsed config file.
    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(v) = file.debounce_delay_ms {
            self.debounce_delay_ms = v;
        }
        if let Some(v) = file.min_search_length {
            self.min_search_length = v;
        }
        if file.catalog_path.is_some() {
            self.catalog_path = file.catalog_path;
        }
        if file.store_path.is_some() {
            self.store_path = file.store_path;
        }
        if file.page.is_some() {
            self.page = file.page;
        }
        if file.page_url.is_some() {
            self.page_url = file.page_url;
        }
    }
}

pub fn parse_config_file(path: &Path) -> Result<ConfigFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parse config file {}", path.display()))
}

fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the base configuration: defaults plus the user config file when one
/// exists. A malformed file is logged and ignored rather than blocking
/// startup.
pub fn load_base_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    let Some(path) = default_config_path() else {
        return cfg;
    };
    if !path.exists() {
        return cfg;
    }
    match parse_config_file(&path) {
        Ok(file) => {
            info!(path = %path.display(), "config file loaded");
            cfg.apply_file(file);
        }
        Err(e) => warn!(?e, "ignoring unreadable config file"),
    }
    cfg
}

#[cfg(test)]
mod tests;
