//! Worksheet serialization

use std::io::Write;
use tracing::warn;

use super::cell_ref::{cell_reference, column_name};
use super::xml::XmlPart;
use crate::error::{TableScrapeError, TableScrapeResult};
use crate::table_extractor::{CellValue, Table};
use crate::utils::{XLSX_MAX_CELL_CHARS, XLSX_MAX_COLS, XLSX_MAX_ROWS};

const NS_MAIN: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

/// Rows and columns one table occupies on its sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct SheetExtent {
    pub rows: usize,
    pub cols: usize,
}

/// Sheet layout for `table`
///
/// Label rows come first: the table's header rows, or one row of positional
/// labels `0..width` when it has none. Data rows follow. With `include_index`
/// column A holds the 0-based data row number and is blank on label rows.
pub(super) fn extent(table: &Table, include_index: bool) -> SheetExtent {
    let label_rows = label_row_count(table);
    let index_cols = usize::from(include_index);
    let has_content = table.width() > 0 || !table.rows().is_empty();

    SheetExtent {
        rows: label_rows + table.rows().len(),
        cols: if has_content { table.width() + index_cols } else { 0 },
    }
}

fn label_row_count(table: &Table) -> usize {
    if table.has_header() {
        table.header_rows().len()
    } else if table.width() > 0 {
        1
    } else {
        0
    }
}

pub(super) fn check_limits(name: &str, extent: SheetExtent) -> TableScrapeResult<()> {
    if extent.rows > XLSX_MAX_ROWS {
        return Err(TableScrapeError::WorkbookLimit {
            sheet: name.to_string(),
            message: format!("{} rows (maximum {XLSX_MAX_ROWS})", extent.rows),
        });
    }
    if extent.cols > XLSX_MAX_COLS {
        return Err(TableScrapeError::WorkbookLimit {
            sheet: name.to_string(),
            message: format!("{} columns (maximum {XLSX_MAX_COLS})", extent.cols),
        });
    }
    Ok(())
}

pub(super) fn write_sheet<W: Write>(
    sink: W,
    table: &Table,
    include_index: bool,
) -> TableScrapeResult<()> {
    let extent = extent(table, include_index);
    let first_col = usize::from(include_index);

    let mut xml = XmlPart::new(sink)?;
    xml.open("worksheet", &[("xmlns", NS_MAIN)])?;

    let dimension = if extent.rows == 0 || extent.cols == 0 {
        "A1".to_string()
    } else {
        format!("A1:{}{}", column_name(extent.cols - 1), extent.rows)
    };
    xml.empty("dimension", &[("ref", dimension.as_str())])?;

    xml.open("sheetData", &[])?;
    let mut row_idx = 0usize;

    if table.has_header() {
        for labels in table.header_rows() {
            open_row(&mut xml, row_idx)?;
            for (col, label) in labels.iter().enumerate() {
                write_text(&mut xml, row_idx, first_col + col, label)?;
            }
            xml.close("row")?;
            row_idx += 1;
        }
    } else if table.width() > 0 {
        open_row(&mut xml, row_idx)?;
        for col in 0..table.width() {
            write_number(&mut xml, row_idx, first_col + col, col as f64)?;
        }
        xml.close("row")?;
        row_idx += 1;
    }

    for (data_idx, cells) in table.rows().iter().enumerate() {
        open_row(&mut xml, row_idx)?;
        if include_index {
            write_number(&mut xml, row_idx, 0, data_idx as f64)?;
        }
        for (col, cell) in cells.iter().enumerate() {
            match cell {
                CellValue::Empty => {}
                CellValue::Number(value) => write_number(&mut xml, row_idx, first_col + col, *value)?,
                CellValue::Text(text) => write_text(&mut xml, row_idx, first_col + col, text)?,
            }
        }
        xml.close("row")?;
        row_idx += 1;
    }

    xml.close("sheetData")?;
    xml.close("worksheet")
}

fn open_row<W: Write>(xml: &mut XmlPart<W>, row_idx: usize) -> TableScrapeResult<()> {
    let r = (row_idx + 1).to_string();
    xml.open("row", &[("r", r.as_str())])
}

fn write_number<W: Write>(
    xml: &mut XmlPart<W>,
    row: usize,
    col: usize,
    value: f64,
) -> TableScrapeResult<()> {
    let reference = cell_reference(row, col);
    xml.open("c", &[("r", reference.as_str())])?;
    xml.text_element("v", &[], &value.to_string())?;
    xml.close("c")
}

fn write_text<W: Write>(
    xml: &mut XmlPart<W>,
    row: usize,
    col: usize,
    text: &str,
) -> TableScrapeResult<()> {
    let cleaned = sanitize_text(text);
    if cleaned.is_empty() {
        return Ok(());
    }

    let reference = cell_reference(row, col);
    xml.open("c", &[("r", reference.as_str()), ("t", "inlineStr")])?;
    xml.open("is", &[])?;
    if cleaned.starts_with(char::is_whitespace) || cleaned.ends_with(char::is_whitespace) {
        xml.text_element("t", &[("xml:space", "preserve")], &cleaned)?;
    } else {
        xml.text_element("t", &[], &cleaned)?;
    }
    xml.close("is")?;
    xml.close("c")
}

/// Drop characters XML 1.0 cannot carry and clip to the Excel cell limit
fn sanitize_text(text: &str) -> String {
    let mut out: String = text
        .chars()
        .filter(|c| {
            matches!(c, '\t' | '\n' | '\r')
                || (!c.is_control() && !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
        })
        .collect();

    if let Some((byte_idx, _)) = out.char_indices().nth(XLSX_MAX_CELL_CHARS) {
        warn!(
            "Cell text longer than {} characters, truncating",
            XLSX_MAX_CELL_CHARS
        );
        out.truncate(byte_idx);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::sanitize_text;

    #[test]
    fn strips_control_characters_but_keeps_line_breaks() {
        assert_eq!(sanitize_text("a\u{0}b\u{1b}c\nd\te"), "abc\nd\te");
    }

    #[test]
    fn clips_to_cell_limit() {
        let long = "é".repeat(40_000);
        assert_eq!(sanitize_text(&long).chars().count(), 32_767);
    }
}
