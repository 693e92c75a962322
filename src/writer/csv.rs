//! CSV report writing

use std::path::Path;

use crate::error::{StatementError, StatementResult};
use crate::reports::ReportLine;

/// Write the report lines as a two-column CSV file
///
/// Amounts are written as plain decimal dollar values; header and spacer
/// lines leave the amount cell empty.
pub(super) fn write(path: &Path, lines: &[ReportLine]) -> StatementResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(StatementError::write)?;

    writer
        .write_record([super::LINE_ITEM_COLUMN, super::AMOUNT_COLUMN])
        .map_err(StatementError::write)?;

    for line in lines {
        let amount = line
            .amount
            .map(|a| format!("{:.2}", a.to_dollars_f64()))
            .unwrap_or_default();
        writer
            .write_record([line.line_item.as_str(), amount.as_str()])
            .map_err(StatementError::write)?;
    }

    writer.flush().map_err(StatementError::write)?;
    Ok(())
}
