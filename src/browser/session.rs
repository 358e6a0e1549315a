//! One browser, one page, one run

use chromiumoxide::page::Page;
use tracing::{info, warn};

use super::page_helpers::{get_page_url_with_fallback, wait_for_rendered_page};
use super::page_timeout::with_page_timeout;
use super::wrapper::BrowserWrapper;
use crate::browser_setup::launch_browser;
use crate::config::ScrapeConfig;
use crate::error::{TableScrapeError, TableScrapeResult};
use crate::pipeline::MarkupSource;

/// The browser session a scrape run exclusively owns
///
/// Created by [`BrowserSession::open`], released by
/// [`BrowserSession::shutdown`]. Dropping a session without shutting it down
/// still kills the browser and removes its profile, but skips the graceful
/// close.
pub struct BrowserSession {
    wrapper: Option<BrowserWrapper>,
    page: Page,
}

impl BrowserSession {
    /// Launch a browser and load the configured URL
    ///
    /// Waits for the load event (bounded by `page_load_timeout_secs`) and then
    /// for client-side rendering (bounded by `render_wait_secs`).
    ///
    /// # Errors
    ///
    /// - [`TableScrapeError::Browser`] when no browser can be found or launched
    /// - [`TableScrapeError::Navigation`] when the page fails to load
    /// - [`TableScrapeError::Timeout`] when loading exceeds the timeout
    pub async fn open(config: &ScrapeConfig) -> TableScrapeResult<Self> {
        let (browser, handler, user_data_dir) =
            launch_browser(config.headless(), config.chrome_data_dir().cloned()).await?;
        let wrapper = BrowserWrapper::new(browser, handler, user_data_dir);

        let page = match wrapper.browser().new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                wrapper.shutdown().await;
                return Err(TableScrapeError::Browser(format!(
                    "Failed to create page: {e}"
                )));
            }
        };

        let mut session = Self {
            wrapper: Some(wrapper),
            page,
        };

        if let Err(e) = session.navigate(config).await {
            session.shutdown().await;
            return Err(e);
        }

        Ok(session)
    }

    async fn navigate(&self, config: &ScrapeConfig) -> TableScrapeResult<()> {
        let url = config.start_url();
        info!("Navigating to {}", url);

        let navigation_error = |e: chromiumoxide::error::CdpError| TableScrapeError::Navigation {
            url: url.to_string(),
            message: e.to_string(),
        };

        with_page_timeout(
            async {
                self.page.goto(url).await.map_err(&navigation_error)?;
                self.page
                    .wait_for_navigation()
                    .await
                    .map_err(&navigation_error)?;
                Ok(())
            },
            config.page_load_timeout_secs(),
            "Page load",
        )
        .await?;

        wait_for_rendered_page(&self.page, config.render_wait_secs()).await;
        Ok(())
    }

    /// URL the page currently shows, which after manual navigation may differ
    /// from the one entered
    pub async fn current_url(&self) -> String {
        get_page_url_with_fallback(&self.page).await
    }

    /// Close the browser and remove its profile; calling twice is a no-op
    pub async fn shutdown(&mut self) {
        if let Some(wrapper) = self.wrapper.take() {
            wrapper.shutdown().await;
        }
    }
}

impl MarkupSource for BrowserSession {
    async fn capture_markup(&self) -> TableScrapeResult<String> {
        if self.wrapper.is_none() {
            return Err(TableScrapeError::Browser(
                "browser session already shut down".to_string(),
            ));
        }

        let url = self.current_url().await;
        info!("Capturing rendered markup from {}", url);

        let html = self
            .page
            .content()
            .await
            .map_err(|e| TableScrapeError::Browser(format!("Failed to read page content: {e}")))?;

        if html.trim().is_empty() {
            warn!("Page at {} returned empty markup", url);
        }

        Ok(html)
    }
}
