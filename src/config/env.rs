//! Environment overrides for the interactive binary
//!
//! The CLI takes no flags; the few knobs worth turning are read from the
//! environment instead.

use super::builder::{ScrapeConfigBuilder, WithStartUrl};
use super::types::{NavigationMode, ScrapeConfig};
use crate::error::{TableScrapeError, TableScrapeResult};

/// `auto` or `confirm`
pub const ENV_NAVIGATION: &str = "TABLESCRAPE_NAVIGATION";
/// Output workbook path
pub const ENV_OUTPUT: &str = "TABLESCRAPE_OUTPUT";
/// `1`/`true`/`yes` hides the browser window
pub const ENV_HEADLESS: &str = "TABLESCRAPE_HEADLESS";

impl ScrapeConfig {
    /// Build a config for `url` with overrides taken from the process environment
    ///
    /// # Errors
    ///
    /// Fails when an override has an unrecognized value or the URL is invalid.
    pub fn from_env(url: &str) -> TableScrapeResult<ScrapeConfig> {
        Self::from_lookup(url, |key| std::env::var(key).ok())
    }

    /// Same as [`ScrapeConfig::from_env`] with an injectable variable source
    pub fn from_lookup<F>(url: &str, lookup: F) -> TableScrapeResult<ScrapeConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder: ScrapeConfigBuilder<WithStartUrl> = ScrapeConfig::builder().start_url(url);

        if let Some(mode) = lookup(ENV_NAVIGATION).filter(|v| !v.trim().is_empty()) {
            builder = builder.navigation_mode(mode.parse::<NavigationMode>()?);
        }

        if let Some(path) = lookup(ENV_OUTPUT).filter(|v| !v.trim().is_empty()) {
            builder = builder.output_path(path.trim());
        }

        if let Some(flag) = lookup(ENV_HEADLESS).filter(|v| !v.trim().is_empty()) {
            builder = builder.headless(parse_flag(ENV_HEADLESS, &flag)?);
        }

        builder.build()
    }
}

fn parse_flag(key: &str, value: &str) -> TableScrapeResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(TableScrapeError::Config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}
