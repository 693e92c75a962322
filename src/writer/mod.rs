//! Report persistence
//!
//! Writes the income statement as a two-column table (`Line Item`,
//! `Amount`), overwriting any existing file at the output path. The format
//! is chosen by file extension, mirroring the loader. Failures surface as
//! `Write` errors; there is no retry and no partial output.

mod csv;
mod xlsx;

use std::path::Path;

use crate::error::{StatementError, StatementResult};
use crate::reports::ReportLine;

/// Header of the label column in the output file
pub const LINE_ITEM_COLUMN: &str = "Line Item";

/// Header of the amount column in the output file
pub const AMOUNT_COLUMN: &str = "Amount";

/// Persist the report lines to the output path
pub fn write_report(path: &Path, lines: &[ReportLine]) -> StatementResult<()> {
    match extension_of(path).as_deref() {
        Some("xlsx") | Some("xlsm") => xlsx::write(path, lines),
        Some("csv") => self::csv::write(path, lines),
        _ => Err(StatementError::UnsupportedFormat(
            path.display().to_string(),
        )),
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}
