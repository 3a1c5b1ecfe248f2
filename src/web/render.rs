use std::fmt::{self, Write};
use std::time::Duration;

use reqwest::Url;

use crate::catalog::RecommendedSite;
use crate::scrape::ScrapeResult;

/// Everything the page shows for one request.
#[derive(Debug, Default)]
pub struct PageData<'a> {
    pub url: String,
    pub selector: String,
    pub results: Vec<ScrapeResult>,
    pub duration: Option<Duration>,
    pub error: Option<String>,
    pub recommended: &'a [RecommendedSite],
    pub visited: Vec<String>,
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Web Scraper</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 60rem; margin: 2rem auto; padding: 0 1rem; }
form { display: flex; gap: .5rem; flex-wrap: wrap; }
input[type=text] { flex: 1 1 16rem; padding: .4rem; }
.error { color: #b00020; }
.meta { color: #555; }
section { margin-top: 1.5rem; }
</style>
</head>
<body>
<h1>Web Scraper</h1>
"#;

const TAIL: &str = "</body>\n</html>\n";

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// `/?url=..&selector=..` with the values form-encoded.
fn scrape_href(url: &str, selector: Option<&str>) -> String {
    let mut params = vec![("url", url)];
    if let Some(selector) = selector {
        params.push(("selector", selector));
    }
    match Url::parse_with_params("http://localhost/", &params) {
        Ok(u) => format!("/?{}", u.query().unwrap_or_default()),
        Err(_) => "/".to_string(),
    }
}

/// Renders the whole page. Pure: all input comes from `page`.
pub fn render_page(page: &PageData<'_>) -> Result<String, fmt::Error> {
    let mut out = String::from(HEAD);

    writeln!(
        out,
        r#"<form method="get" action="/">
<input type="text" name="url" placeholder="https://example.com" value="{}">
<input type="text" name="selector" placeholder="CSS selector, e.g. h2 a" value="{}">
<button type="submit">Scrape</button>
</form>"#,
        escape_html(&page.url),
        escape_html(&page.selector)
    )?;

    if let Some(error) = &page.error {
        writeln!(out, r#"<p class="error">{}</p>"#, escape_html(error))?;
    }

    if !page.url.is_empty() && page.error.is_none() {
        render_results(&mut out, page)?;
    }

    render_recommended(&mut out, page.recommended)?;
    render_visited(&mut out, &page.visited)?;

    out.push_str(TAIL);
    Ok(out)
}

fn render_results(out: &mut String, page: &PageData<'_>) -> fmt::Result {
    writeln!(out, "<section>")?;
    write!(out, r#"<p class="meta">Found {} results"#, page.results.len())?;
    if let Some(duration) = page.duration {
        write!(out, " in {:?}", duration)?;
    }
    writeln!(out, "</p>")?;

    if page.results.is_empty() {
        writeln!(out, "<p>No results found for this selector.</p>")?;
    } else {
        writeln!(out, "<ol>")?;
        for (i, result) in page.results.iter().enumerate() {
            let title = escape_html(&result.title);
            if result.link.is_empty() {
                writeln!(out, r#"<li id="result-{}">{}</li>"#, i + 1, title)?;
            } else {
                writeln!(
                    out,
                    r#"<li id="result-{}"><a href="{}" target="_blank" rel="noopener">{}</a></li>"#,
                    i + 1,
                    escape_html(&result.link),
                    title
                )?;
            }
        }
        writeln!(out, "</ol>")?;
    }
    writeln!(out, "</section>")
}

fn render_recommended(out: &mut String, sites: &[RecommendedSite]) -> fmt::Result {
    if sites.is_empty() {
        return Ok(());
    }
    writeln!(out, "<section>\n<h2>Try these</h2>\n<ul>")?;
    for site in sites {
        writeln!(
            out,
            r#"<li><span class="tag">{}</span> <a href="{}">{}</a> <code>{}</code></li>"#,
            escape_html(&site.tag),
            escape_html(&scrape_href(&site.url, Some(&site.selector))),
            escape_html(&site.example),
            escape_html(&site.selector)
        )?;
    }
    writeln!(out, "</ul>\n</section>")
}

fn render_visited(out: &mut String, visited: &[String]) -> fmt::Result {
    if visited.is_empty() {
        return Ok(());
    }
    writeln!(out, "<section>\n<h2>Recently visited</h2>\n<ul>")?;
    for url in visited {
        writeln!(
            out,
            r#"<li><a href="{}">{}</a></li>"#,
            escape_html(&scrape_href(url, None)),
            escape_html(url)
        )?;
    }
    writeln!(out, "</ul>\n</section>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_landing_page_lists_catalog_and_history() {
        let catalog = Catalog::builtin();
        let page = PageData {
            recommended: catalog.sites(),
            visited: vec!["https://b.example".to_string(), "https://a.example".to_string()],
            ..PageData::default()
        };

        let html = render_page(&page).expect("renders");
        assert!(html.contains("Hacker News headlines"));
        assert!(html.contains("<code>.titleline &gt; a</code>"));
        assert!(html.contains(
            r#"href="/?url=https%3A%2F%2Fnews.ycombinator.com&amp;selector=.titleline+%3E+a""#
        ));
        let b = html.find(">https://b.example<").expect("b listed");
        let a = html.find(">https://a.example<").expect("a listed");
        assert!(b < a);
        assert!(!html.contains("Found"));
    }

    #[test]
    fn test_results_are_numbered_and_escaped() {
        let page = PageData {
            url: "https://example.com".to_string(),
            selector: "h2 a".to_string(),
            results: vec![
                ScrapeResult {
                    title: "<script>alert(1)</script>".to_string(),
                    link: "https://example.com/x?a=1&b=2".to_string(),
                },
                ScrapeResult {
                    title: "No link".to_string(),
                    link: String::new(),
                },
            ],
            duration: Some(Duration::from_millis(42)),
            ..PageData::default()
        };

        let html = render_page(&page).expect("renders");
        assert!(html.contains("Found 2 results in 42ms"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"href="https://example.com/x?a=1&amp;b=2""#));
        assert!(html.contains(r#"<li id="result-2">No link</li>"#));
        assert!(html.contains(r#"name="selector" placeholder="CSS selector, e.g. h2 a" value="h2 a""#));
    }

    #[test]
    fn test_empty_results_message() {
        let page = PageData {
            url: "https://example.com".to_string(),
            selector: "h2 a".to_string(),
            duration: Some(Duration::from_millis(3)),
            ..PageData::default()
        };

        let html = render_page(&page).expect("renders");
        assert!(html.contains("No results found for this selector."));
    }

    #[test]
    fn test_error_replaces_results() {
        let page = PageData {
            url: "https://example.com".to_string(),
            error: Some("Error scraping: status code error: 404 Not Found".to_string()),
            ..PageData::default()
        };

        let html = render_page(&page).expect("renders");
        assert!(html.contains(r#"<p class="error">Error scraping: status code error: 404 Not Found</p>"#));
        assert!(!html.contains("No results found"));
    }
}
