//! Excel workbook report writing

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::{StatementError, StatementResult};
use crate::reports::ReportLine;

/// Write the report lines as a two-column xlsx worksheet
///
/// Amounts are written as numbers so the result stays usable in a
/// spreadsheet; header and spacer lines leave the amount cell blank.
pub(super) fn write(path: &Path, lines: &[ReportLine]) -> StatementResult<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet
        .write_string(0, 0, super::LINE_ITEM_COLUMN)
        .map_err(StatementError::write)?;
    sheet
        .write_string(0, 1, super::AMOUNT_COLUMN)
        .map_err(StatementError::write)?;

    for (i, line) in lines.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet
            .write_string(row, 0, &line.line_item)
            .map_err(StatementError::write)?;
        if let Some(amount) = line.amount {
            sheet
                .write_number(row, 1, amount.to_dollars_f64())
                .map_err(StatementError::write)?;
        }
    }

    workbook.save(path).map_err(StatementError::write)?;
    Ok(())
}
