pub mod base;
pub mod browser;
pub mod eventbrite_html;

use std::path::PathBuf;

use tracing::{info, warn};
use url::Url;

use crate::config::ScrapeConfig;
use crate::dates::DateRange;
use crate::error::ScrapeError;
use crate::models::EventRecord;
use crate::report;
use browser::{BrowserSession, ScrollOutcome};

#[derive(Debug, Clone)]
pub struct ScrapeSummary {
    pub range: DateRange,
    pub url: String,
    pub events: usize,
    pub scrolls: usize,
    pub output: PathBuf,
}

pub fn listing_url(config: &ScrapeConfig, range: &DateRange) -> Result<Url, ScrapeError> {
    let base = format!(
        "{}/d/{}/events/",
        config.site.trim_end_matches('/'),
        config.region
    );
    let url = Url::parse_with_params(
        &base,
        [
            ("start_date", range.start_param()),
            ("end_date", range.end_param()),
        ],
    )?;
    Ok(url)
}

/// Loads the listing in a fresh browser, scrolls it until it stops growing
/// and returns the cards found. The browser is gone once this returns.
fn fetch_events(
    config: &ScrapeConfig,
    url: &str,
) -> Result<(Vec<EventRecord>, ScrollOutcome), ScrapeError> {
    let session = BrowserSession::launch(config)?;
    let page = session.open_page(config)?;

    info!(%url, "navigating");
    page.navigate(url, config.navigation_timeout)?;

    info!(max = config.max_scrolls, "scrolling");
    let outcome = browser::scroll_until_stable(&page, config.max_scrolls, config.scroll_settle)?;
    info!(
        iterations = outcome.iterations,
        settled = outcome.settled,
        "scrolling finished"
    );

    info!("extracting event cards");
    let snapshot = page.snapshot()?;
    let events = eventbrite_html::parse_document(&snapshot.html, &snapshot.url);
    Ok((events, outcome))
}

pub fn scrape_weekend(
    config: &ScrapeConfig,
    range: DateRange,
) -> Result<ScrapeSummary, ScrapeError> {
    let url = listing_url(config, &range)?.to_string();
    let (events, outcome) = fetch_events(config, &url)?;

    if events.is_empty() {
        warn!(%url, "no events found");
    } else {
        info!(count = events.len(), "found events");
    }

    let html = report::render_report(&config.city, &range, &events);
    report::write_report(&config.output_path, &html)?;
    info!(path = %config.output_path.display(), "saved report");

    Ok(ScrapeSummary {
        range,
        url,
        events: events.len(),
        scrolls: outcome.iterations,
        output: config.output_path.clone(),
    })
}
