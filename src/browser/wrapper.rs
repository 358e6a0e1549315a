//! Browser process ownership
//!
//! Pairs the chromiumoxide `Browser` with its CDP handler task and the profile
//! directory so the three are always released together.

use chromiumoxide::browser::Browser;
use std::path::PathBuf;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Wrapper for Browser and its event handler task
///
/// The handler MUST be aborted when the browser goes away, otherwise it keeps
/// polling a dead connection.
pub struct BrowserWrapper {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl BrowserWrapper {
    pub(crate) fn new(browser: Browser, handler: JoinHandle<()>, user_data_dir: PathBuf) -> Self {
        Self {
            browser,
            handler,
            user_data_dir: Some(user_data_dir),
        }
    }

    pub(crate) fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Close the browser, wait for the process to exit and remove the profile
    ///
    /// Failures are logged, not returned: by the time this runs the export has
    /// either succeeded or already produced the error the caller reports.
    pub async fn shutdown(mut self) {
        info!("Shutting down browser");

        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }

        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }

        self.cleanup_temp_dir();
    }

    /// Remove the profile directory (blocking)
    ///
    /// MUST run after the browser process has exited; Windows refuses to delete
    /// files Chrome still holds open.
    fn cleanup_temp_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            info!("Cleaning up browser profile: {}", path.display());
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!(
                    "Failed to clean up browser profile {}: {}. Manual cleanup may be required.",
                    path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for BrowserWrapper {
    fn drop(&mut self) {
        self.handler.abort();
        // Browser::drop() kills the Chrome process

        if self.user_data_dir.is_some() {
            warn!("BrowserWrapper dropped without shutdown - removing profile in Drop");
            self.cleanup_temp_dir();
        }
    }
}
