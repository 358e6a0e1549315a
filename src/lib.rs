//! Capture the HTML tables of a rendered web page into an Excel workbook.
//!
//! A run opens a browser on a URL, optionally waits for the user to reach the
//! right page, captures the rendered markup and writes every `<table>` to its
//! own sheet of an `.xlsx` file.

pub mod browser;
pub mod browser_setup;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod table_extractor;
pub mod utils;
pub mod workbook;

pub use browser::BrowserSession;
pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use config::{NavigationMode, ScrapeConfig};
pub use error::{TableScrapeError, TableScrapeResult};
pub use pipeline::{
    ExportOutcome, MarkupSource, Prompt, StdinPrompt, export_markup, run, run_interactive,
};
pub use table_extractor::{CellValue, Table, extract_tables, has_tables};
pub use workbook::{WorkbookOptions, WorkbookSummary, WorkbookWriter};
