//! Core configuration types for table scraping

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::TableScrapeError;

/// How the page the tables are taken from is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Capture as soon as the entered URL has rendered
    Auto,
    /// Load the URL, then wait for the user to navigate and press Enter
    #[default]
    Confirm,
}

impl FromStr for NavigationMode {
    type Err = TableScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "automatic" => Ok(Self::Auto),
            "confirm" | "manual" => Ok(Self::Confirm),
            other => Err(TableScrapeError::Config(format!(
                "unknown navigation mode '{other}' (expected 'auto' or 'confirm')"
            ))),
        }
    }
}

/// Main configuration struct for a scrape run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Normalized http(s) URL opened in the browser
    pub(crate) start_url: String,

    /// Workbook destination, overwritten when it exists
    pub(crate) output_path: PathBuf,

    pub(crate) navigation_mode: NavigationMode,

    /// Hide the browser window
    ///
    /// Confirm mode needs a visible window for the user to navigate in, so the
    /// default is `false`.
    pub(crate) headless: bool,

    /// Timeout in seconds for `page.goto()` and the first load event
    ///
    /// Default: 30 seconds
    pub(crate) page_load_timeout_secs: u64,

    /// Seconds to poll for a rendered `<table>` before capturing anyway
    ///
    /// Default: 10 seconds
    pub(crate) render_wait_secs: u64,

    /// Write the 0-based row index as the first column
    pub(crate) include_index: bool,

    /// Sheet names are `{sheet_prefix}{n}`
    pub(crate) sheet_prefix: String,

    /// Browser profile directory; a per-process temp dir when unset
    pub(crate) chrome_data_dir: Option<PathBuf>,
}
