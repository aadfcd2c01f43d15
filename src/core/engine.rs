use crate::core::extractor;
use crate::domain::model::{BatchResult, SiteResult};
use crate::domain::ports::Fetcher;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Drives a batch of root URLs through fetch-then-extract, fanning out under
/// a concurrency bound. Failures are absorbed per URL: one unreachable
/// municipality never costs the others their results.
pub struct ScrapeEngine<F: Fetcher + 'static> {
    fetcher: Arc<F>,
    concurrent_requests: usize,
}

impl<F: Fetcher + 'static> ScrapeEngine<F> {
    pub fn new(fetcher: F, concurrent_requests: usize) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            concurrent_requests: concurrent_requests.max(1),
        }
    }

    /// Scrapes every URL independently and returns one SiteResult per input
    /// URL, in input order regardless of completion order. The batch itself
    /// cannot fail.
    pub async fn run(&self, urls: Vec<String>) -> BatchResult {
        tracing::info!("Scraping {} site(s)", urls.len());

        let semaphore = Arc::new(Semaphore::new(self.concurrent_requests));
        let mut handles = Vec::with_capacity(urls.len());

        for url in urls {
            let fetcher = Arc::clone(&self.fetcher);
            let semaphore = Arc::clone(&semaphore);
            let task_url = url.clone();
            let handle = tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("semaphore is never closed");
                scrape_site(fetcher.as_ref(), &task_url).await
            });
            handles.push((url, handle));
        }

        let mut sites = Vec::with_capacity(handles.len());
        for (url, handle) in handles {
            match handle.await {
                Ok(site) => sites.push(site),
                Err(e) => {
                    tracing::warn!("Scrape task for {} aborted: {}", url, e);
                    sites.push(SiteResult::empty(url));
                }
            }
        }

        BatchResult { sites }
    }
}

async fn scrape_site<F: Fetcher>(fetcher: &F, url: &str) -> SiteResult {
    let body = match fetcher.fetch(url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Fetch failed for {}: {}", url, e);
            return SiteResult::empty(url);
        }
    };

    match extractor::extract(&body, url) {
        Ok(services) => {
            tracing::debug!("Extracted {} record(s) from {}", services.len(), url);
            SiteResult::new(url, services)
        }
        Err(e) => {
            tracing::warn!("Extraction failed for {}: {}", url, e);
            SiteResult::empty(url)
        }
    }
}
