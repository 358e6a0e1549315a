//! Shared configuration constants for tablescrape
//!
//! Default values used by the config builder, the browser session and the
//! workbook writer, kept in one place to avoid magic numbers.

/// Workbook written when no output path is configured
pub const DEFAULT_OUTPUT_FILE: &str = "output_tables.xlsx";

/// Sheets are named `{prefix}{n}` with `n` starting at 1
pub const DEFAULT_SHEET_PREFIX: &str = "sheet";

/// Timeout for `page.goto()` and the initial load event
pub const DEFAULT_PAGE_LOAD_TIMEOUT_SECS: u64 = 30;

/// Implicit wait: how long to poll for a rendered `<table>` after load
///
/// Expiry is not an error. The page is captured as-is and the "no tables"
/// branch decides what happens next.
pub const DEFAULT_RENDER_WAIT_SECS: u64 = 10;

/// Excel row limit per worksheet
pub const XLSX_MAX_ROWS: usize = 1_048_576;

/// Excel column limit per worksheet (column XFD)
pub const XLSX_MAX_COLS: usize = 16_384;

/// Excel maximum characters in a single cell
pub const XLSX_MAX_CELL_CHARS: usize = 32_767;

/// Excel maximum sheet name length
pub const XLSX_MAX_SHEET_NAME_CHARS: usize = 31;

/// Chrome user agent string
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
