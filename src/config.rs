use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError};
use crate::error::ScrapeError;
use crate::history::{VisitHistory, DEFAULT_HISTORY_SIZE};
use crate::scrape::{Scraper, ScraperConfig};
use crate::web::AppState;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] ScrapeError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub scraper: ScraperConfig,
    pub history_size: usize,
    /// JSON catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            scraper: ScraperConfig::default(),
            history_size: DEFAULT_HISTORY_SIZE,
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::from_json_file(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Builds the state shared by all request handlers.
    pub fn app_state(&self) -> Result<AppState, ConfigError> {
        Ok(AppState {
            scraper: Arc::new(Scraper::new(self.scraper.clone())?),
            history: Arc::new(VisitHistory::new(self.history_size)),
            catalog: Arc::new(self.load_catalog()?),
        })
    }
}
