//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use std::path::PathBuf;

use super::builder::ScrapeConfigBuilder;
use super::types::NavigationMode;

impl<State> ScrapeConfigBuilder<State> {
    /// Workbook destination (default `output_tables.xlsx` in the working directory)
    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    #[must_use]
    pub fn navigation_mode(mut self, mode: NavigationMode) -> Self {
        self.navigation_mode = mode;
        self
    }

    /// Set browser headless mode
    ///
    /// A headless browser cannot be navigated by hand, so combining
    /// `headless(true)` with [`NavigationMode::Confirm`] only makes sense when
    /// the entered URL already shows the table.
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    #[must_use]
    pub fn page_load_timeout_secs(mut self, secs: u64) -> Self {
        self.page_load_timeout_secs = secs;
        self
    }

    /// Maximum time to poll for a rendered `<table>` before capturing
    ///
    /// Zero captures immediately after the load event.
    #[must_use]
    pub fn render_wait_secs(mut self, secs: u64) -> Self {
        self.render_wait_secs = secs;
        self
    }

    #[must_use]
    pub fn include_index(mut self, include: bool) -> Self {
        self.include_index = include;
        self
    }

    #[must_use]
    pub fn sheet_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.sheet_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn chrome_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.chrome_data_dir = dir;
        self
    }
}
