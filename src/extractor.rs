use scraper::{Html, Selector};

use crate::error::ScrapeError;

/// Raw text and `href` of one matched element, before trimming and link normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub text: String,
    pub href: Option<String>,
}

/// A parsed HTML document that can answer CSS selector queries.
pub trait Document {
    fn select_all(&self, selector: &str) -> Result<Vec<Extracted>, ScrapeError>;
}

impl Document for Html {
    fn select_all(&self, selector: &str) -> Result<Vec<Extracted>, ScrapeError> {
        let selector =
            Selector::parse(selector).map_err(|e| ScrapeError::Selector(e.to_string()))?;

        Ok(self
            .select(&selector)
            .map(|el| Extracted {
                text: el.text().collect(),
                href: el.value().attr("href").map(ToString::to_string),
            })
            .collect())
    }
}

/// Matches of `selector` in document order.
pub fn extract<D: Document + ?Sized>(
    doc: &D,
    selector: &str,
) -> Result<Vec<Extracted>, ScrapeError> {
    doc.select_all(selector)
}
