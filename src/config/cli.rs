use crate::domain::model::ScrapeRequest;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "egov-scrape")]
#[command(about = "Extract eGovernance service listings from municipal websites")]
pub struct CliConfig {
    /// Root URLs of municipality sites, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub urls: Vec<String>,

    /// JSON request file shaped {"urls": [...]}; use '-' to read stdin.
    #[arg(long, conflicts_with = "urls")]
    pub request_file: Option<String>,

    #[arg(long, default_value = "5")]
    pub concurrent_requests: usize,

    /// Per-request timeout in seconds.
    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The URL batch, from --urls or the request file. URLs from either
    /// source are validated before any network work.
    pub fn resolve_urls(&self) -> Result<Vec<String>> {
        let urls = if let Some(path) = &self.request_file {
            let raw = if path == "-" {
                std::io::read_to_string(std::io::stdin())?
            } else {
                std::fs::read_to_string(path)?
            };
            let request: ScrapeRequest = serde_json::from_str(&raw)?;
            request.urls
        } else {
            self.urls.clone()
        };

        if urls.is_empty() {
            return Err(ScrapeError::InvalidConfigValue {
                field: "urls".to_string(),
                value: "[]".to_string(),
                reason: "At least one URL is required".to_string(),
            });
        }
        for url in &urls {
            validate_url("urls", url)?;
        }
        Ok(urls)
    }
}

impl ConfigProvider for CliConfig {
    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.urls.is_empty() && self.request_file.is_none() {
            return Err(ScrapeError::InvalidConfigValue {
                field: "urls".to_string(),
                value: String::new(),
                reason: "Provide --urls or --request-file".to_string(),
            });
        }
        validate_positive_number("concurrent_requests", self.concurrent_requests, 1)?;
        validate_positive_number("timeout_secs", self.timeout_secs as usize, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(urls: Vec<String>) -> CliConfig {
        CliConfig {
            urls,
            request_file: None,
            concurrent_requests: 5,
            timeout_secs: 10,
            verbose: false,
        }
    }

    #[test]
    fn accepts_a_plain_url_batch() {
        let cfg = config(vec![
            "https://butwalmun.gov.np/".to_string(),
            "https://biratnagarmun.gov.np/".to_string(),
        ]);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.resolve_urls().unwrap().len(), 2);
    }

    #[test]
    fn rejects_missing_urls() {
        let cfg = config(Vec::new());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_invalid_url_in_batch() {
        let cfg = config(vec!["not a url".to_string()]);
        assert!(cfg.resolve_urls().is_err());
    }

    #[test]
    fn rejects_zero_concurrency() {
        let mut cfg = config(vec!["https://butwalmun.gov.np/".to_string()]);
        cfg.concurrent_requests = 0;
        assert!(cfg.validate().is_err());
    }
}
