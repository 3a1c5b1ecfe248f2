use std::str::FromStr;

use reqwest::Url;
use serde::{Deserialize, Serialize};

/// How relative `href`s are turned into absolute links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkResolution {
    /// Prefix heuristic: root-relative links get the origin, everything else is
    /// appended to the page URL. Does not collapse `..` and mangles `//host` links.
    #[default]
    Naive,
    /// RFC 3986 resolution against the page URL.
    Standard,
}

impl LinkResolution {
    pub fn resolve(self, base_url: &str, href: &str) -> String {
        match self {
            LinkResolution::Naive => normalize(base_url, href),
            LinkResolution::Standard => resolve_standard(base_url, href),
        }
    }
}

impl FromStr for LinkResolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(LinkResolution::Naive),
            "standard" => Ok(LinkResolution::Standard),
            other => Err(format!(
                "unknown link resolution `{}` (expected `naive` or `standard`)",
                other
            )),
        }
    }
}

fn is_absolute(href: &str) -> bool {
    href.starts_with("http") || href.starts_with("mailto:")
}

/// Turns `href` found on the page at `base_url` into an absolute link.
///
/// An empty `href` stays empty. Links starting with `http` or `mailto:` are
/// returned as they are.
pub fn normalize(base_url: &str, href: &str) -> String {
    if href.is_empty() {
        return String::new();
    }
    if is_absolute(href) {
        return href.to_string();
    }

    if href.starts_with('/') {
        let parts: Vec<&str> = base_url.split('/').collect();
        let origin = if parts.len() >= 3 {
            parts[..3].join("/")
        } else {
            base_url.strip_suffix('/').unwrap_or(base_url).to_string()
        };
        format!("{}{}", origin, href)
    } else {
        format!("{}/{}", base_url.strip_suffix('/').unwrap_or(base_url), href)
    }
}

fn resolve_standard(base_url: &str, href: &str) -> String {
    if href.is_empty() {
        return String::new();
    }
    if href.starts_with("mailto:") {
        return href.to_string();
    }

    match Url::parse(base_url).and_then(|base| base.join(href)) {
        Ok(url) => url.to_string(),
        Err(_) => normalize(base_url, href),
    }
}
