use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::new("info"))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let summary = weekend_scrape_lib::run().await?;
    tracing::info!(
        events = summary.events,
        scrolls = summary.scrolls,
        url = %summary.url,
        start = %summary.range.start_param(),
        end = %summary.range.end_param(),
        output = %summary.output.display(),
        "done"
    );
    Ok(())
}
