//! Excel workbook ledger reading

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};

use crate::error::{StatementError, StatementResult};
use crate::models::RawRecord;

/// Read the first worksheet of an xlsx workbook into raw records
///
/// The first row is the header. Cells are rendered to text so the cleaner
/// sees the same shape regardless of source cell type.
pub(super) fn load(path: &Path) -> StatementResult<Vec<RawRecord>> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(StatementError::read)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| StatementError::read("workbook contains no worksheets"))?
        .map_err(StatementError::read)?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or(StatementError::MissingColumn(super::CATEGORY_COLUMN))?;
    let header_text: Vec<String> = header.iter().map(cell_text).collect();
    let (category_idx, amount_idx) =
        super::resolve_columns(header_text.iter().map(String::as_str))?;

    let records = rows
        .map(|row| {
            RawRecord::new(
                row.get(category_idx).map(cell_text).unwrap_or_default(),
                row.get(amount_idx).map(cell_text).unwrap_or_default(),
            )
        })
        .collect();

    Ok(records)
}

/// Render a cell to text; blank cells become the empty string
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
