use std::time::Duration;

use reqwest::StatusCode;
use scraper::Html;
use serde::Serialize;
use tracing::debug;

use crate::error::ScrapeError;
use crate::extractor::{extract, Extracted};
use crate::links::LinkResolution;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeResult {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Whole-request timeout, body included.
    pub timeout: Duration,
    pub user_agent: String,
    pub link_resolution: LinkResolution,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfig {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            link_resolution: LinkResolution::default(),
        }
    }
}

/// Fetches a page and pulls out the text and link of every element matching a selector.
///
/// Holds no per-request state, so one instance is shared by all handlers.
#[derive(Debug, Clone)]
pub struct Scraper {
    client: reqwest::Client,
    config: ScraperConfig,
}

impl Scraper {
    pub fn new(config: ScraperConfig) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(ScrapeError::Fetch)?;

        Ok(Scraper { client, config })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Scrapes `url` for elements matching `selector`, in document order.
    ///
    /// Only a `200 OK` response is scraped. Elements whose text is blank are skipped,
    /// and an empty `Vec` is returned when nothing matches.
    pub async fn scrape(&self, url: &str, selector: &str) -> Result<Vec<ScrapeResult>, ScrapeError> {
        debug!("Visit {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e, ScrapeError::Fetch))?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("Unexpected status {} from {}", status, url);
            return Err(ScrapeError::Status(status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| self.classify(e, ScrapeError::Parse))?;

        let extracted = {
            let doc = Html::parse_document(&html);
            extract(&doc, selector)?
        };

        let results = to_results(url, extracted, self.config.link_resolution);
        debug!("{} results for `{}` on {}", results.len(), selector, url);
        Ok(results)
    }

    fn classify(
        &self,
        err: reqwest::Error,
        otherwise: fn(reqwest::Error) -> ScrapeError,
    ) -> ScrapeError {
        if err.is_timeout() {
            ScrapeError::Timeout(self.config.timeout)
        } else {
            otherwise(err)
        }
    }
}

/// Drops blank matches, trims titles and resolves links against `base_url`.
pub fn to_results(
    base_url: &str,
    extracted: Vec<Extracted>,
    resolution: LinkResolution,
) -> Vec<ScrapeResult> {
    extracted
        .into_iter()
        .filter_map(|Extracted { text, href }| {
            let title = text.trim();
            if title.is_empty() {
                return None;
            }
            let link = resolution.resolve(base_url, href.as_deref().unwrap_or(""));
            Some(ScrapeResult {
                title: title.to_string(),
                link,
            })
        })
        .collect()
}
