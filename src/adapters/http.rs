use crate::domain::ports::Fetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Production Fetcher backed by reqwest. Non-2xx statuses and timeouts both
/// come back as transport errors; callers only ever see a successful body.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("{} responded {}", url, response.status());
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}
