pub mod catalog;
pub mod config;
pub mod extractor;
pub mod history;
pub mod links;
pub mod scrape;
pub mod web;

mod error;

pub use catalog::{Catalog, RecommendedSite};
pub use config::Config;
pub use error::ScrapeError;
pub use extractor::{extract, Document, Extracted};
pub use history::VisitHistory;
pub use links::{normalize, LinkResolution};
pub use scrape::{ScrapeResult, Scraper, ScraperConfig};
