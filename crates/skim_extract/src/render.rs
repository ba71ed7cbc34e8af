use std::time::Duration;

use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions};

use skim_core::{Error, Result};

use crate::extractors::dynamic::BODY_SELECTORS;

/// Produces JavaScript-rendered HTML for a URL.
#[async_trait]
pub trait RenderPage: Send + Sync {
    async fn render(&self, url: &str) -> Result<String>;
}

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36";

/// Drives one headless Chrome process per URL. The process is scoped to the
/// call: dropping the `Browser` handle tears it down on every exit path,
/// whether extraction succeeded, the selectors never appeared, or navigation
/// failed.
pub struct ChromeRenderer {
    render_wait: Duration,
}

impl ChromeRenderer {
    pub fn new(render_wait: Duration) -> Self {
        Self { render_wait }
    }
}

fn render_blocking(url: &str, render_wait: Duration) -> anyhow::Result<String> {
    let options = LaunchOptions::default_builder()
        .headless(true)
        .sandbox(false)
        .build()?;
    let browser = Browser::new(options)?;
    let tab = browser.new_tab()?;
    tab.set_user_agent(BROWSER_USER_AGENT, None, None)?;

    tab.navigate_to(url)?;
    tab.wait_until_navigated()?;

    // Bounded readiness check for asynchronously-loaded content: once a
    // content candidate appears, or the wait expires, read whatever DOM is
    // there rather than failing. `body` (the final fallback) is always
    // present and would satisfy the wait immediately, so it is left out.
    let ready_selector = BODY_SELECTORS[..BODY_SELECTORS.len() - 1].join(", ");
    if tab
        .wait_for_element_with_custom_timeout(&ready_selector, render_wait)
        .is_err()
    {
        tracing::debug!(
            "no content selector appeared within {:?} on {}, reading DOM as-is",
            render_wait,
            url
        );
    }

    Ok(tab.get_content()?)
}

#[async_trait]
impl RenderPage for ChromeRenderer {
    async fn render(&self, url: &str) -> Result<String> {
        let url = url.to_string();
        let render_wait = self.render_wait;

        // headless_chrome blocks, so the whole browser session runs on the
        // blocking pool.
        tokio::task::spawn_blocking(move || render_blocking(&url, render_wait))
            .await
            .map_err(|e| Error::Unexpected(format!("render task failed: {}", e)))?
            .map_err(|e| Error::Render(e.to_string()))
    }
}
