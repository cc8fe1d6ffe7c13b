pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod report;
pub mod scraping;

use anyhow::Context;

pub use config::ScrapeConfig;
pub use dates::DateRange;
pub use error::ScrapeError;
pub use models::EventRecord;
pub use scraping::ScrapeSummary;

/// Scrapes next weekend's listing with the default configuration. The
/// browser work is blocking, so it runs on tokio's blocking pool.
pub async fn run() -> anyhow::Result<ScrapeSummary> {
    let config = ScrapeConfig::default();
    let range = dates::upcoming_weekend();

    let summary = tokio::task::spawn_blocking(move || scraping::scrape_weekend(&config, range))
        .await
        .context("scrape task panicked")??;
    Ok(summary)
}
