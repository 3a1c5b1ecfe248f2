use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use selector_scraper::config::DEFAULT_LISTEN_ADDR;
use selector_scraper::history::DEFAULT_HISTORY_SIZE;
use selector_scraper::scrape::DEFAULT_USER_AGENT;
use selector_scraper::{Config, LinkResolution, ScraperConfig};

#[derive(Parser, Debug)]
#[command(name = "selector-scraper")]
#[command(about = "Scrape the text and links matching a CSS selector from a web page")]
#[command(version)]
pub struct Args {
    /// Address the web UI listens on
    #[arg(short, long, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: SocketAddr,

    /// Timeout in seconds for fetching a page
    #[arg(short, long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// JSON file with the recommended sites (url, tag, selector, example)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// How relative links are resolved (naive, standard)
    #[arg(long, default_value = "naive")]
    pub link_resolution: LinkResolution,

    /// Number of recently visited URLs to remember
    #[arg(long, default_value_t = DEFAULT_HISTORY_SIZE)]
    pub history_size: usize,

    /// User agent sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            listen_addr: args.listen,
            scraper: ScraperConfig {
                timeout: Duration::from_secs(args.timeout_secs),
                user_agent: args.user_agent,
                link_resolution: args.link_resolution,
            },
            history_size: args.history_size,
            catalog_path: args.catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::from(Args::try_parse_from(["selector-scraper"]).expect("parses"));

        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR.parse::<SocketAddr>().expect("valid address"));
        assert_eq!(config.scraper.timeout, Duration::from_secs(30));
        assert_eq!(config.scraper.link_resolution, LinkResolution::Naive);
        assert_eq!(config.history_size, 10);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "selector-scraper",
            "--listen",
            "0.0.0.0:9000",
            "--timeout-secs",
            "5",
            "--link-resolution",
            "standard",
            "--catalog",
            "sites.json",
        ])
        .expect("parses");
        let config = Config::from(args);

        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.scraper.timeout, Duration::from_secs(5));
        assert_eq!(config.scraper.link_resolution, LinkResolution::Standard);
        assert_eq!(config.catalog_path, Some(PathBuf::from("sites.json")));
    }

    #[test]
    fn test_rejects_unknown_link_resolution() {
        assert!(Args::try_parse_from(["selector-scraper", "--link-resolution", "rfc"]).is_err());
    }
}
