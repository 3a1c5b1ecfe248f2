use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::catalog::Catalog;
use crate::error::ScrapeError;
use crate::history::VisitHistory;
use crate::scrape::Scraper;

use super::render::{render_page, PageData};

pub const MISSING_SELECTOR: &str = "Please provide a CSS selector.";

/// Shared by every request. Only `history` is mutated.
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<Scraper>,
    pub history: Arc<VisitHistory>,
    pub catalog: Arc<Catalog>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScrapeQuery {
    pub url: Option<String>,
    pub selector: Option<String>,
}

pub async fn index(State(state): State<AppState>, Query(query): Query<ScrapeQuery>) -> Response {
    let page = build_page(&state, query).await;

    match render_page(&page) {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            error!("Template execution error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Resolves the request into page data, scraping when a URL and selector are available.
pub async fn build_page(state: &AppState, query: ScrapeQuery) -> PageData<'_> {
    let mut page = PageData {
        recommended: state.catalog.sites(),
        visited: state.history.snapshot(),
        ..PageData::default()
    };

    let Some(url) = query.url.filter(|u| !u.is_empty()) else {
        return page;
    };
    state.history.record(&url);

    let selector = query
        .selector
        .filter(|s| !s.is_empty())
        .or_else(|| state.catalog.default_selector(&url).map(ToString::to_string));

    match selector {
        Some(selector) => {
            let start = Instant::now();
            let outcome = state.scraper.scrape(&url, &selector).await;
            page.duration = Some(round_to_millis(start.elapsed()));

            match outcome {
                Ok(results) => {
                    debug!("Scraped {} results from {}", results.len(), url);
                    page.results = results;
                }
                Err(e) => {
                    warn!("Scraping {} failed: {}", url, e);
                    page.error = Some(format!("Error scraping: {}", e));
                }
            }
            page.selector = selector;
        }
        None => {
            page.error = Some(ScrapeError::Validation(MISSING_SELECTOR.to_string()).to_string());
        }
    }

    page.url = url;
    page
}

fn round_to_millis(d: Duration) -> Duration {
    Duration::from_millis((d.as_micros() as f64 / 1000.0).round() as u64)
}
