use std::path::Path;
use tracing::info;

use super::MarkupSource;
use crate::error::TableScrapeResult;
use crate::table_extractor::{extract_tables, has_tables};
use crate::workbook::{WorkbookSummary, WorkbookWriter};

/// What an export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Workbook written, one sheet per table
    Written(WorkbookSummary),
    /// The page has no `<table>`; nothing was written
    NoTables,
}

impl ExportOutcome {
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        match self {
            Self::Written(summary) => summary.sheets.len(),
            Self::NoTables => 0,
        }
    }
}

/// Extract every table from `markup` and write them to `path`
///
/// When the markup has no table, no file is created and an existing file at
/// `path` is left alone.
///
/// # Errors
///
/// Extraction and workbook errors are passed through.
pub fn export_markup(
    markup: &str,
    path: &Path,
    writer: &WorkbookWriter,
) -> TableScrapeResult<ExportOutcome> {
    if !has_tables(markup) {
        info!("No <table> elements in {} bytes of markup", markup.len());
        return Ok(ExportOutcome::NoTables);
    }

    let tables = extract_tables(markup)?;
    let summary = writer.write_to_path(path, &tables)?;
    Ok(ExportOutcome::Written(summary))
}

/// Capture the current page from `source` and export its tables
pub async fn capture_and_export<S: MarkupSource>(
    source: &S,
    path: &Path,
    writer: &WorkbookWriter,
) -> TableScrapeResult<ExportOutcome> {
    let markup = source.capture_markup().await?;
    export_markup(&markup, path, writer)
}
