//! Resolved runtime configuration.

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::view::Theme;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: Url,
    pub request_timeout: Option<Duration>,
    pub alt_screen: bool,
    pub mouse: bool,
    pub theme: Theme,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            endpoint: parse_endpoint(&cli.endpoint)?,
            request_timeout: timeout_from_secs(cli.timeout_secs),
            alt_screen: !cli.inline,
            // Hit-testing assumes the view starts at row 0.
            mouse: !cli.inline,
            theme: if cli.plain {
                Theme::plain()
            } else {
                Theme::styled()
            },
        })
    }
}

pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::config(format!(
            "endpoint must be http or https, got {other}://"
        ))),
    }
}

const fn timeout_from_secs(secs: u64) -> Option<Duration> {
    if secs == 0 {
        None
    } else {
        Some(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn endpoint_must_be_http() {
        assert!(parse_endpoint("http://localhost:8000").is_ok());
        assert!(parse_endpoint(" https://example.com/count ").is_ok());
        assert!(matches!(
            parse_endpoint("ftp://localhost:8000"),
            Err(Error::Config(_))
        ));
        assert!(matches!(parse_endpoint("localhost"), Err(Error::Url(_))));
    }

    #[test]
    fn zero_timeout_means_none() {
        assert_eq!(timeout_from_secs(0), None);
        assert_eq!(timeout_from_secs(3), Some(Duration::from_secs(3)));
    }

    #[test]
    fn from_cli_inline_plain() {
        let cli = Cli::try_parse_from([
            "counter-view",
            "--endpoint",
            "http://127.0.0.1:9000",
            "--timeout-secs",
            "0",
            "--inline",
            "--plain",
        ])
        .unwrap();
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.endpoint.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(config.request_timeout, None);
        assert!(!config.alt_screen);
        assert!(!config.mouse);
        assert_eq!(config.theme, Theme::plain());
    }

    #[test]
    fn from_cli_defaults_to_full_screen() {
        let cli = Cli::try_parse_from([
            "counter-view",
            "--endpoint",
            "http://localhost:8000",
            "--timeout-secs",
            "10",
        ])
        .unwrap();
        let config = Config::from_cli(&cli).unwrap();
        assert!(config.alt_screen);
        assert!(config.mouse);
        assert_eq!(config.theme, Theme::styled());
        assert_eq!(config.request_timeout, Some(Duration::from_secs(10)));
    }
}
