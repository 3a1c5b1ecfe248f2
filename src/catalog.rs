use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

/// A site offered on the landing page together with a selector known to work for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedSite {
    pub url: String,
    pub tag: String,
    pub selector: String,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    sites: Vec<RecommendedSite>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog: {0}")]
    Json(#[from] serde_json::Error),
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn new(sites: Vec<RecommendedSite>) -> Self {
        Catalog { sites }
    }

    pub fn builtin() -> Self {
        let site = |url: &str, tag: &str, selector: &str, example: &str| RecommendedSite {
            url: url.to_string(),
            tag: tag.to_string(),
            selector: selector.to_string(),
            example: example.to_string(),
        };

        Catalog::new(vec![
            site(
                "https://news.ycombinator.com",
                "Tech News",
                ".titleline > a",
                "Hacker News headlines",
            ),
            site(
                "https://www.reddit.com/r/golang/",
                "Golang",
                "h3._eYtD2XCVieq6emjKBH3m",
                "Reddit post titles",
            ),
            site(
                "https://github.com/trending",
                "GitHub",
                "h2 a",
                "Trending repositories",
            ),
        ])
    }

    /// Reads a JSON array of sites.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(Catalog::new(serde_json::from_str(raw)?))
    }

    pub fn sites(&self) -> &[RecommendedSite] {
        &self.sites
    }

    /// Selector of the site whose URL is exactly `url`.
    pub fn default_selector(&self, url: &str) -> Option<&str> {
        self.sites
            .iter()
            .find(|site| site.url == url)
            .map(|site| site.selector.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_default_selectors() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.sites().len(), 3);
        assert_eq!(
            catalog.default_selector("https://news.ycombinator.com"),
            Some(".titleline > a")
        );
        assert_eq!(catalog.default_selector("https://github.com/trending"), Some("h2 a"));
    }

    #[test]
    fn test_default_selector_is_exact_match() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.default_selector("https://news.ycombinator.com/"), None);
        assert_eq!(catalog.default_selector("https://github.com/trending?since=weekly"), None);
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"[{"url": "https://lobste.rs", "tag": "Tech", "selector": "a.u-url", "example": "Lobsters stories"}]"#,
        )
        .expect("valid catalog");

        assert_eq!(
            catalog.sites(),
            &[RecommendedSite {
                url: "https://lobste.rs".to_string(),
                tag: "Tech".to_string(),
                selector: "a.u-url".to_string(),
                example: "Lobsters stories".to_string(),
            }]
        );
    }

    #[test]
    fn test_from_json_rejects_missing_fields() {
        let err = Catalog::from_json(r#"[{"url": "https://lobste.rs"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
