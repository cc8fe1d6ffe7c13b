use std::{io, path::PathBuf, time::Duration};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("browser failed to launch: {0}")]
    BrowserLaunch(String),
    #[error("navigation to {url} did not finish within {}s", timeout.as_secs())]
    NavigationTimeout { url: String, timeout: Duration },
    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },
    #[error("page error: {0}")]
    Page(String),
    #[error("invalid listing url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to write report to {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
