pub mod engine;
pub mod extractor;
pub mod markers;

pub use crate::domain::model::{BatchResult, ScrapeRequest, ServiceRecord, SiteResult};
pub use crate::domain::ports::{ConfigProvider, Fetcher};
pub use crate::utils::error::Result;
