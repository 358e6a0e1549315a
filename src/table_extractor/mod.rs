//! HTML table extraction
//!
//! Turns rendered page markup into [`Table`] grids, one per `<table>` element
//! in document order. Nested tables are extracted as tables of their own and
//! do not contribute rows to the table that contains them.

mod cell;
mod grid;
mod labels;
mod markup;

pub use cell::CellValue;
pub use grid::Table;

use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::{debug, info};

use crate::error::TableScrapeResult;

static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("table").expect("BUG: hardcoded selector 'table' is statically valid")
});

/// Whether the markup contains at least one `<table>` element
#[must_use]
pub fn has_tables(markup: &str) -> bool {
    let document = Html::parse_document(markup);
    document.select(&TABLE_SELECTOR).next().is_some()
}

/// Number of `<table>` elements in the markup
#[must_use]
pub fn count_tables(markup: &str) -> usize {
    let document = Html::parse_document(markup);
    document.select(&TABLE_SELECTOR).count()
}

/// Parse every `<table>` in the markup into a [`Table`]
///
/// The result has one entry per `<table>` element, including empty ones, in
/// document order.
///
/// # Errors
///
/// Returns [`crate::TableScrapeError::Extraction`] when a table's expanded
/// grid exceeds the cell limit.
pub fn extract_tables(markup: &str) -> TableScrapeResult<Vec<Table>> {
    let document = Html::parse_document(markup);

    let tables = document
        .select(&TABLE_SELECTOR)
        .enumerate()
        .map(|(index, element)| {
            let table = grid::build_table(index, element)?;
            debug!(
                "Table {}: {} header row(s), {} data row(s), {} column(s)",
                index + 1,
                table.header_rows().len(),
                table.rows().len(),
                table.width()
            );
            Ok(table)
        })
        .collect::<TableScrapeResult<Vec<_>>>()?;

    info!("Extracted {} table(s)", tables.len());
    Ok(tables)
}
