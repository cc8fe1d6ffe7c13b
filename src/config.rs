use std::{path::PathBuf, time::Duration};

const DEFAULT_SITE: &str = "https://www.eventbrite.ca";
const DEFAULT_REGION: &str = "canada--toronto";
const DEFAULT_CITY: &str = "Toronto";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0 Safari/537.36";
const DEFAULT_OUTPUT: &str = "eventbrite_stealth_events.html";
const DEFAULT_VIEWPORT: (u32, u32) = (1280, 800);
const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_MAX_SCROLLS: usize = 10;
const DEFAULT_SCROLL_SETTLE: Duration = Duration::from_secs(2);

/// Everything a single scrape run needs. The binary always runs with
/// [`ScrapeConfig::default`]; other values exist for tests.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub site: String,
    pub region: String,
    pub city: String,
    pub user_agent: String,
    pub viewport: (u32, u32),
    pub headless: bool,
    pub sandbox: bool,
    pub stealth: bool,
    pub navigation_timeout: Duration,
    pub max_scrolls: usize,
    pub scroll_settle: Duration,
    pub output_path: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            site: DEFAULT_SITE.to_string(),
            region: DEFAULT_REGION.to_string(),
            city: DEFAULT_CITY.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            viewport: DEFAULT_VIEWPORT,
            headless: true,
            // Chrome's sandbox does not start inside most containers.
            sandbox: false,
            stealth: true,
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
            max_scrolls: DEFAULT_MAX_SCROLLS,
            scroll_settle: DEFAULT_SCROLL_SETTLE,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ScrapeConfig {
    /// Browser idle timeout: the engine must not give up on Chrome while a
    /// navigation is still inside its own bound.
    pub fn idle_browser_timeout(&self) -> Duration {
        self.navigation_timeout + self.scroll_settle + Duration::from_secs(30)
    }
}
