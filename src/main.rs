use clap::Parser;
use egov_scrape::domain::ports::ConfigProvider;
use egov_scrape::utils::{logger, validation::Validate};
use egov_scrape::{CliConfig, HttpFetcher, ScrapeEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting egov-scrape");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let urls = match config.resolve_urls() {
        Ok(urls) => urls,
        Err(e) => {
            tracing::error!("Could not resolve URL batch: {}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let fetcher = HttpFetcher::new(config.request_timeout())?;
    let engine = ScrapeEngine::new(fetcher, config.concurrent_requests());

    let batch = engine.run(urls).await;
    println!("{}", serde_json::to_string_pretty(&batch)?);

    tracing::info!("Finished: {} site(s) scraped", batch.len());
    Ok(())
}
