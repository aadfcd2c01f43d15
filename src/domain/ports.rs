use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The transport seam. Anything that can turn a URL into a page body
/// satisfies this; the engine never cares how.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn concurrent_requests(&self) -> usize;
    fn request_timeout(&self) -> Duration;
}
