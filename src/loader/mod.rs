//! Ledger loading
//!
//! Reads a tabular ledger file into raw records. The format is chosen by
//! file extension: `.xlsx`/`.xlsm` workbooks and `.csv` files are supported.
//! The input must carry a `Category` and an `Amount` column (matched
//! case-insensitively); any additional columns are ignored.

mod csv;
mod xlsx;

use std::path::Path;

use crate::error::{StatementError, StatementResult};
use crate::models::RawRecord;

/// Header name of the category column
pub const CATEGORY_COLUMN: &str = "Category";

/// Header name of the amount column
pub const AMOUNT_COLUMN: &str = "Amount";

/// Load a ledger file into raw records
///
/// Fails with `FileNotFound` before any read if the path does not exist,
/// `UnsupportedFormat` for unrecognized extensions, and `Read` or
/// `MissingColumn` when the file cannot be parsed as a ledger table.
pub fn load_table(path: &Path) -> StatementResult<Vec<RawRecord>> {
    if !path.exists() {
        return Err(StatementError::file_not_found(path));
    }

    match extension_of(path).as_deref() {
        Some("xlsx") | Some("xlsm") => xlsx::load(path),
        Some("csv") => self::csv::load(path),
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

/// Locate the category and amount columns in a header row
///
/// Matching is case-insensitive and ignores surrounding whitespace. Returns
/// (category index, amount index).
fn resolve_columns<'a, I>(headers: I) -> StatementResult<(usize, usize)>
where
    I: Iterator<Item = &'a str>,
{
    let headers: Vec<&str> = headers.collect();

    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };

    let category = find(CATEGORY_COLUMN).ok_or(StatementError::MissingColumn(CATEGORY_COLUMN))?;
    let amount = find(AMOUNT_COLUMN).ok_or(StatementError::MissingColumn(AMOUNT_COLUMN))?;

    Ok((category, amount))
}
