//! Error types for table scraping
//!
//! Every fallible library operation returns [`TableScrapeResult`]. Browser
//! plumbing works in `anyhow` internally and is folded into
//! [`TableScrapeError::Browser`] at the module boundary.

use thiserror::Error;

/// Result type alias for table scraping operations
pub type TableScrapeResult<T> = Result<T, TableScrapeError>;

/// Error types for table scraping
#[derive(Debug, Error)]
pub enum TableScrapeError {
    /// Configuration rejected by the builder
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL could not be parsed or is not http(s)
    #[error("Invalid URL '{0}': expected an http or https address")]
    InvalidUrl(String),

    /// Browser could not be found, launched or driven
    #[error("Browser error: {0}")]
    Browser(String),

    /// Page navigation failed
    #[error("Failed to load {url}: {message}")]
    Navigation { url: String, message: String },

    /// A browser operation exceeded its time budget
    #[error("{operation} timeout after {seconds} seconds")]
    Timeout { operation: String, seconds: u64 },

    /// Table markup could not be turned into a grid
    #[error("Table {index} could not be extracted: {message}")]
    Extraction { index: usize, message: String },

    /// Sheet content exceeds what the xlsx format can hold
    #[error("Sheet '{sheet}' exceeds workbook limits: {message}")]
    WorkbookLimit { sheet: String, message: String },

    /// A workbook needs at least one sheet
    #[error("Cannot write a workbook without tables")]
    EmptyWorkbook,

    /// Reading user input failed
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Zip container error
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl From<anyhow::Error> for TableScrapeError {
    fn from(err: anyhow::Error) -> Self {
        // {:#} keeps the context chain
        Self::Browser(format!("{err:#}"))
    }
}

impl TableScrapeError {
    /// Whether the failure happened before any browser was involved
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::InvalidUrl(_) | Self::Prompt(_))
    }
}
