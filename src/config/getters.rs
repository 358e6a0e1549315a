//! Getter methods for `ScrapeConfig`

use std::path::{Path, PathBuf};

use super::types::{NavigationMode, ScrapeConfig};

impl ScrapeConfig {
    #[must_use]
    pub fn start_url(&self) -> &str {
        &self.start_url
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    #[must_use]
    pub fn navigation_mode(&self) -> NavigationMode {
        self.navigation_mode
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn page_load_timeout_secs(&self) -> u64 {
        self.page_load_timeout_secs
    }

    #[must_use]
    pub fn render_wait_secs(&self) -> u64 {
        self.render_wait_secs
    }

    #[must_use]
    pub fn include_index(&self) -> bool {
        self.include_index
    }

    #[must_use]
    pub fn sheet_prefix(&self) -> &str {
        &self.sheet_prefix
    }

    #[must_use]
    pub fn chrome_data_dir(&self) -> Option<&PathBuf> {
        self.chrome_data_dir.as_ref()
    }
}
