pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::HttpFetcher;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use crate::core::engine::ScrapeEngine;
pub use crate::core::extractor::extract;
pub use domain::model::{BatchResult, ScrapeRequest, ServiceRecord, SiteResult};
pub use utils::error::{Result, ScrapeError, TransportCategory};
