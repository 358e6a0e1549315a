//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! The start URL is the only required field; `build()` is not callable until it
//! has been provided.

use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::{NavigationMode, ScrapeConfig};
use crate::error::{TableScrapeError, TableScrapeResult};
use crate::utils::{
    DEFAULT_OUTPUT_FILE, DEFAULT_PAGE_LOAD_TIMEOUT_SECS, DEFAULT_RENDER_WAIT_SECS,
    DEFAULT_SHEET_PREFIX, XLSX_MAX_SHEET_NAME_CHARS, normalize_url,
};

// Type state for the builder
pub struct WithStartUrl;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) start_url: Option<String>,
    pub(crate) output_path: PathBuf,
    pub(crate) navigation_mode: NavigationMode,
    pub(crate) headless: bool,
    pub(crate) page_load_timeout_secs: u64,
    pub(crate) render_wait_secs: u64,
    pub(crate) include_index: bool,
    pub(crate) sheet_prefix: String,
    pub(crate) chrome_data_dir: Option<PathBuf>,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        Self {
            start_url: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            navigation_mode: NavigationMode::default(),
            headless: false,
            page_load_timeout_secs: DEFAULT_PAGE_LOAD_TIMEOUT_SECS,
            render_wait_secs: DEFAULT_RENDER_WAIT_SECS,
            include_index: true,
            sheet_prefix: DEFAULT_SHEET_PREFIX.to_string(),
            chrome_data_dir: None,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

impl ScrapeConfigBuilder<()> {
    pub fn start_url(self, url: impl Into<String>) -> ScrapeConfigBuilder<WithStartUrl> {
        ScrapeConfigBuilder {
            start_url: Some(url.into()),
            output_path: self.output_path,
            navigation_mode: self.navigation_mode,
            headless: self.headless,
            page_load_timeout_secs: self.page_load_timeout_secs,
            render_wait_secs: self.render_wait_secs,
            include_index: self.include_index,
            sheet_prefix: self.sheet_prefix,
            chrome_data_dir: self.chrome_data_dir,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when the start URL is set
impl ScrapeConfigBuilder<WithStartUrl> {
    /// Validate and assemble the configuration
    ///
    /// # Errors
    ///
    /// - [`TableScrapeError::InvalidUrl`] when the URL is not http(s)
    /// - [`TableScrapeError::Config`] for an empty output path, a zero
    ///   page-load timeout, or a sheet prefix that cannot form a valid
    ///   sheet name
    pub fn build(self) -> TableScrapeResult<ScrapeConfig> {
        let raw_url = self
            .start_url
            .ok_or_else(|| TableScrapeError::Config("start_url is required".to_string()))?;
        let start_url = normalize_url(&raw_url)?;

        if self.output_path.as_os_str().is_empty() {
            return Err(TableScrapeError::Config(
                "output_path must not be empty".to_string(),
            ));
        }

        if self.page_load_timeout_secs == 0 {
            return Err(TableScrapeError::Config(
                "page_load_timeout_secs must be at least 1".to_string(),
            ));
        }

        validate_sheet_prefix(&self.sheet_prefix)?;

        Ok(ScrapeConfig {
            start_url,
            output_path: self.output_path,
            navigation_mode: self.navigation_mode,
            headless: self.headless,
            page_load_timeout_secs: self.page_load_timeout_secs,
            render_wait_secs: self.render_wait_secs,
            include_index: self.include_index,
            sheet_prefix: self.sheet_prefix,
            chrome_data_dir: self.chrome_data_dir,
        })
    }
}

/// Sheet names may not contain `[]:*?/\` and are limited to 31 characters.
/// Seven characters are reserved for the sequence number.
fn validate_sheet_prefix(prefix: &str) -> TableScrapeResult<()> {
    if prefix.trim().is_empty() {
        return Err(TableScrapeError::Config(
            "sheet_prefix must not be empty".to_string(),
        ));
    }
    if let Some(bad) = prefix.chars().find(|c| "[]:*?/\\".contains(*c)) {
        return Err(TableScrapeError::Config(format!(
            "sheet_prefix contains '{bad}', which Excel does not allow in sheet names"
        )));
    }
    if prefix.chars().count() > XLSX_MAX_SHEET_NAME_CHARS - 7 {
        return Err(TableScrapeError::Config(format!(
            "sheet_prefix is longer than {} characters",
            XLSX_MAX_SHEET_NAME_CHARS - 7
        )));
    }
    Ok(())
}
