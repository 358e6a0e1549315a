//! Excel workbook output
//!
//! Writes one worksheet per [`crate::table_extractor::Table`] into an Office
//! Open XML (`.xlsx`) package. The package is a zip archive of XML parts;
//! strings are stored inline so no shared-strings table is needed.

mod cell_ref;
mod parts;
mod sheet;
mod writer;
mod xml;

pub use cell_ref::{cell_reference, column_index, column_name};
pub use writer::{WorkbookOptions, WorkbookSummary, WorkbookWriter, WrittenSheet};
