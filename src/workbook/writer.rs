//! Workbook assembly

use chrono::Utc;
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{parts, sheet};
use crate::error::{TableScrapeError, TableScrapeResult};
use crate::table_extractor::Table;
use crate::utils::DEFAULT_SHEET_PREFIX;

/// Layout choices for the written workbook
#[derive(Debug, Clone)]
pub struct WorkbookOptions {
    /// Write the 0-based row index as column A
    pub include_index: bool,
    /// Sheet `n` (1-based) is named `{sheet_prefix}{n}`
    pub sheet_prefix: String,
    /// Recorded in the document properties when set
    pub source_url: Option<String>,
}

impl Default for WorkbookOptions {
    fn default() -> Self {
        Self {
            include_index: true,
            sheet_prefix: DEFAULT_SHEET_PREFIX.to_string(),
            source_url: None,
        }
    }
}

/// What ended up on one sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenSheet {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
}

/// Result of a successful write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookSummary {
    pub path: PathBuf,
    pub sheets: Vec<WrittenSheet>,
}

/// Writes tables into an `.xlsx` workbook, one sheet per table
#[derive(Debug, Clone, Default)]
pub struct WorkbookWriter {
    options: WorkbookOptions,
}

impl WorkbookWriter {
    #[must_use]
    pub fn new(options: WorkbookOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &WorkbookOptions {
        &self.options
    }

    /// Name of the sheet holding the table at 0-based `index`
    #[must_use]
    pub fn sheet_name(&self, index: usize) -> String {
        format!("{}{}", self.options.sheet_prefix, index + 1)
    }

    /// Write the workbook to `path`, replacing any existing file
    ///
    /// The package is written to a temporary file next to `path` and renamed
    /// into place, so a failed write leaves a previous workbook untouched.
    ///
    /// # Errors
    ///
    /// - [`TableScrapeError::EmptyWorkbook`] when `tables` is empty
    /// - [`TableScrapeError::WorkbookLimit`] when a table does not fit on a sheet
    /// - I/O, zip and XML errors from writing the package
    pub fn write_to_path(
        &self,
        path: &Path,
        tables: &[Table],
    ) -> TableScrapeResult<WorkbookSummary> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut temp = NamedTempFile::new_in(&dir)?;
        let sheets = {
            let (sink, sheets) = self.write(BufWriter::new(temp.as_file_mut()), tables)?;
            sink.into_inner().map_err(|e| e.into_error())?;
            sheets
        };

        temp.persist(path).map_err(|e| e.error)?;

        info!("Wrote {} sheet(s) to {}", sheets.len(), path.display());
        Ok(WorkbookSummary {
            path: path.to_path_buf(),
            sheets,
        })
    }

    /// Write the workbook package into `sink`
    ///
    /// Returns the sink (flushed by the zip finalizer) and the sheet summary.
    ///
    /// # Errors
    ///
    /// Same as [`WorkbookWriter::write_to_path`], minus the file handling.
    pub fn write<W: Write + Seek>(
        &self,
        sink: W,
        tables: &[Table],
    ) -> TableScrapeResult<(W, Vec<WrittenSheet>)> {
        if tables.is_empty() {
            return Err(TableScrapeError::EmptyWorkbook);
        }

        let include_index = self.options.include_index;
        let names: Vec<String> = (0..tables.len()).map(|i| self.sheet_name(i)).collect();

        // Reject oversized tables before anything is written
        let mut sheets = Vec::with_capacity(tables.len());
        for (name, table) in names.iter().zip(tables) {
            let extent = sheet::extent(table, include_index);
            sheet::check_limits(name, extent)?;
            sheets.push(WrittenSheet {
                name: name.clone(),
                rows: extent.rows,
                columns: extent.cols,
            });
        }

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(sink);

        zip.start_file("[Content_Types].xml", options)?;
        parts::content_types(&mut zip, tables.len())?;

        zip.start_file("_rels/.rels", options)?;
        parts::root_rels(&mut zip)?;

        zip.start_file("docProps/core.xml", options)?;
        parts::core_properties(&mut zip, Utc::now(), self.options.source_url.as_deref())?;

        zip.start_file("docProps/app.xml", options)?;
        parts::app_properties(&mut zip)?;

        zip.start_file("xl/workbook.xml", options)?;
        parts::workbook(&mut zip, &names)?;

        zip.start_file("xl/_rels/workbook.xml.rels", options)?;
        parts::workbook_rels(&mut zip, tables.len())?;

        zip.start_file("xl/styles.xml", options)?;
        parts::styles(&mut zip)?;

        for (n, (table, written)) in tables.iter().zip(&sheets).enumerate() {
            debug!(
                "Writing {} ({} rows x {} columns)",
                written.name, written.rows, written.columns
            );
            zip.start_file(format!("xl/worksheets/sheet{}.xml", n + 1), options)?;
            sheet::write_sheet(&mut zip, table, include_index)?;
        }

        let sink = zip.finish()?;
        Ok((sink, sheets))
    }
}
