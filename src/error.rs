use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("fetch failed: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("status code error: {0} {}", status_reason(.0))]
    Status(u16),
    #[error("failed to read document: {0}")]
    Parse(#[source] reqwest::Error),
    #[error("invalid selector: {0}")]
    Selector(String),
    #[error("{0}")]
    Validation(String),
}

impl ScrapeError {
    /// Status code carried by a non-200 response, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ScrapeError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

fn status_reason(code: &u16) -> &'static str {
    reqwest::StatusCode::from_u16(*code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("")
}
