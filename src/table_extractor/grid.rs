//! Span expansion and padding

use scraper::ElementRef;
use tracing::warn;

use super::cell::CellValue;
use super::labels::normalize_header;
use super::markup::{RawCell, collect_sections};
use crate::error::{TableScrapeError, TableScrapeResult};

/// Largest expanded grid accepted for a single table
///
/// Spans are copied into every covered slot, so a handful of
/// `colspan=1000 rowspan=65534` cells would otherwise allocate gigabytes.
pub const MAX_TABLE_CELLS: usize = 5_000_000;

/// A parsed HTML table
///
/// Every header row and data row has exactly [`Table::width`] entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    header: Vec<Vec<String>>,
    rows: Vec<Vec<CellValue>>,
    width: usize,
}

impl Table {
    /// Column label rows; empty when the table has no header
    #[must_use]
    pub fn header_rows(&self) -> &[Vec<String>] {
        &self.header
    }

    /// Data rows: body rows followed by footer rows
    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }

    /// No header and no data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }
}

type Slot = Option<RawCell>;

pub(super) fn build_table(index: usize, element: ElementRef<'_>) -> TableScrapeResult<Table> {
    let sections = collect_sections(element);
    let mut budget = CellBudget {
        table_index: index + 1,
        used: 0,
    };

    let head = expand_spans(&sections.head, &mut budget)?;
    let body = expand_spans(&sections.body, &mut budget)?;
    let foot = expand_spans(&sections.foot, &mut budget)?;

    let width = head
        .iter()
        .chain(&body)
        .chain(&foot)
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    // Padding fills every row out to the widest one
    let row_count = head.len() + body.len() + foot.len();
    budget.check_padded(width, row_count)?;

    let header_text: Vec<Vec<String>> = head
        .into_iter()
        .map(|row| {
            pad(row, width)
                .into_iter()
                .map(|slot| slot.map(|cell| cell.text).unwrap_or_default())
                .collect()
        })
        .collect();

    let rows: Vec<Vec<CellValue>> = body
        .into_iter()
        .chain(foot)
        .map(|row| {
            pad(row, width)
                .into_iter()
                .map(|slot| match slot {
                    Some(cell) => CellValue::infer(&cell.text),
                    None => CellValue::Empty,
                })
                .collect()
        })
        .collect();

    Ok(Table {
        header: normalize_header(header_text),
        rows,
        width,
    })
}

struct CellBudget {
    table_index: usize,
    used: usize,
}

impl CellBudget {
    fn charge(&mut self, cells: usize) -> TableScrapeResult<()> {
        self.used = self.used.saturating_add(cells);
        if self.used > MAX_TABLE_CELLS {
            return Err(TableScrapeError::Extraction {
                index: self.table_index,
                message: format!("expanded grid exceeds {MAX_TABLE_CELLS} cells"),
            });
        }
        Ok(())
    }

    /// The padded grid is `width` slots for every row, spans or not
    fn check_padded(&self, width: usize, rows: usize) -> TableScrapeResult<()> {
        let cells = width.saturating_mul(rows);
        if cells > MAX_TABLE_CELLS {
            return Err(TableScrapeError::Extraction {
                index: self.table_index,
                message: format!(
                    "padded grid of {rows} rows x {width} columns exceeds {MAX_TABLE_CELLS} cells"
                ),
            });
        }
        Ok(())
    }
}

/// Expand colspan/rowspan within one row group
///
/// A spanning cell's value is copied into every slot it covers. Row spans stop
/// at the end of the group. Slots nobody covers stay `None`.
fn expand_spans(
    rows: &[Vec<RawCell>],
    budget: &mut CellBudget,
) -> TableScrapeResult<Vec<Vec<Slot>>> {
    let mut grid: Vec<Vec<Slot>> = vec![Vec::new(); rows.len()];

    for (r, row) in rows.iter().enumerate() {
        let mut col = 0usize;

        for cell in row {
            // Skip slots already claimed by a rowspan from above
            while grid[r].get(col).is_some_and(Option::is_some) {
                col += 1;
            }

            let row_end = (r + cell.rowspan).min(rows.len());
            if row_end - r < cell.rowspan {
                warn!(
                    "rowspan={} at row {} runs past its row group, clipping",
                    cell.rowspan,
                    r + 1
                );
            }
            budget.charge((row_end - r).saturating_mul(cell.colspan))?;

            for target in &mut grid[r..row_end] {
                if target.len() < col + cell.colspan {
                    target.resize(col + cell.colspan, None);
                }
                for slot in &mut target[col..col + cell.colspan] {
                    *slot = Some(cell.clone());
                }
            }

            col += cell.colspan;
        }
    }

    Ok(grid)
}

fn pad(mut row: Vec<Slot>, width: usize) -> Vec<Slot> {
    row.resize(width, None);
    row
}
