use std::{ffi::OsStr, sync::Arc, thread, time::Duration};

use headless_chrome::{util::Wait, Browser, LaunchOptions, Tab};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;

const SCROLL_HEIGHT_JS: &str = "document.body ? document.body.scrollHeight : 0";
const SCROLL_TO_BOTTOM_JS: &str = "window.scrollTo(0, document.body.scrollHeight)";
const READY_STATE_JS: &str = "document.readyState + '|' + document.URL";
const NAVIGATION_POLL: Duration = Duration::from_millis(250);

/// Something whose scrollable height can grow as it is scrolled.
pub trait ScrollSurface {
    fn scroll_height(&self) -> Result<u64, ScrapeError>;
    fn scroll_to_bottom(&self) -> Result<(), ScrapeError>;
}

/// Something that reports its document's load state as `"<readyState>|<url>"`.
pub trait DocumentState {
    fn ready_state(&self) -> Result<String, ScrapeError>;
}

/// True once the navigated document has been parsed. A fresh tab's
/// `about:blank` is already complete, so it never counts.
pub fn is_document_parsed(state: &str) -> bool {
    let Some((ready, url)) = state.split_once('|') else {
        return false;
    };
    !url.is_empty() && !url.starts_with("about:") && matches!(ready, "interactive" | "complete")
}

/// Polls `document` until its DOM is parsed or `timeout` passes.
pub fn wait_for_dom<D: DocumentState + ?Sized>(
    document: &D,
    url: &str,
    timeout: Duration,
    poll: Duration,
) -> Result<(), ScrapeError> {
    Wait::new(timeout, poll)
        .until(|| {
            let state = document.ready_state().ok()?;
            is_document_parsed(&state).then_some(())
        })
        .map_err(|_| ScrapeError::NavigationTimeout {
            url: url.to_string(),
            timeout,
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOutcome {
    pub iterations: usize,
    /// The page stopped growing before the iteration cap.
    pub settled: bool,
}

/// Scrolls to the bottom until the height stops changing or `max_iterations`
/// is reached, sleeping `settle` after each scroll so lazy content can load.
pub fn scroll_until_stable<S: ScrollSurface + ?Sized>(
    surface: &S,
    max_iterations: usize,
    settle: Duration,
) -> Result<ScrollOutcome, ScrapeError> {
    for iteration in 1..=max_iterations {
        let before = surface.scroll_height()?;
        surface.scroll_to_bottom()?;
        thread::sleep(settle);
        let after = surface.scroll_height()?;
        debug!(iteration, before, after, "scrolled");
        if after == before {
            return Ok(ScrollOutcome {
                iterations: iteration,
                settled: true,
            });
        }
    }

    Ok(ScrollOutcome {
        iterations: max_iterations,
        settled: false,
    })
}

/// Owns the Chrome process for one run. `headless_chrome::Browser` kills the
/// process when dropped, so every exit path releases it.
pub struct BrowserSession {
    browser: Browser,
}

impl BrowserSession {
    pub fn launch(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let options = LaunchOptions::default_builder()
            .headless(config.headless)
            .sandbox(config.sandbox)
            .window_size(Some(config.viewport))
            .idle_browser_timeout(config.idle_browser_timeout())
            .args(vec![OsStr::new(
                "--disable-blink-features=AutomationControlled",
            )])
            .build()
            .map_err(|err| ScrapeError::BrowserLaunch(err.to_string()))?;

        let browser =
            Browser::new(options).map_err(|err| ScrapeError::BrowserLaunch(err.to_string()))?;
        info!(headless = config.headless, "browser launched");
        Ok(Self { browser })
    }

    pub fn open_page(&self, config: &ScrapeConfig) -> Result<BrowserPage, ScrapeError> {
        let tab = self
            .browser
            .new_tab()
            .map_err(|err| ScrapeError::BrowserLaunch(err.to_string()))?;
        tab.set_default_timeout(config.navigation_timeout);

        if config.stealth {
            tab.enable_stealth_mode()
                .map_err(|err| ScrapeError::Page(err.to_string()))?;
        }
        tab.set_user_agent(&config.user_agent, None, None)
            .map_err(|err| ScrapeError::Page(err.to_string()))?;

        Ok(BrowserPage { tab })
    }
}

/// Rendered markup plus the URL it was served from, after redirects.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub url: String,
    pub html: String,
}

pub struct BrowserPage {
    tab: Arc<Tab>,
}

impl BrowserPage {
    /// Navigates and waits only until the DOM has been parsed, not for the
    /// network to go quiet.
    pub fn navigate(&self, url: &str, timeout: Duration) -> Result<(), ScrapeError> {
        self.tab
            .navigate_to(url)
            .map_err(|err| ScrapeError::Navigation {
                url: url.to_string(),
                reason: err.to_string(),
            })?;

        wait_for_dom(self, url, timeout, NAVIGATION_POLL)
    }

    pub fn snapshot(&self) -> Result<PageSnapshot, ScrapeError> {
        let html = self
            .tab
            .get_content()
            .map_err(|err| ScrapeError::Page(err.to_string()))?;
        Ok(PageSnapshot {
            url: self.tab.get_url(),
            html,
        })
    }

    fn evaluate(&self, expression: &str) -> Result<Option<Value>, ScrapeError> {
        self.tab
            .evaluate(expression, false)
            .map(|object| object.value)
            .map_err(|err| ScrapeError::Page(err.to_string()))
    }
}

impl DocumentState for BrowserPage {
    fn ready_state(&self) -> Result<String, ScrapeError> {
        let value = self.evaluate(READY_STATE_JS)?;
        value
            .as_ref()
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ScrapeError::Page(format!("unexpected ready state: {value:?}")))
    }
}

impl ScrollSurface for BrowserPage {
    fn scroll_height(&self) -> Result<u64, ScrapeError> {
        let value = self.evaluate(SCROLL_HEIGHT_JS)?;
        value
            .as_ref()
            .and_then(|v| v.as_u64().or_else(|| v.as_f64().map(|f| f as u64)))
            .ok_or_else(|| ScrapeError::Page(format!("unexpected scroll height: {value:?}")))
    }

    fn scroll_to_bottom(&self) -> Result<(), ScrapeError> {
        self.evaluate(SCROLL_TO_BOTTOM_JS).map(|_| ())
    }
}
