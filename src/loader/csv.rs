//! CSV ledger reading

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{StatementError, StatementResult};
use crate::models::RawRecord;

/// Read a CSV ledger into raw records
///
/// The first row is the header. Short rows are tolerated; cells missing
/// from a row load as empty text and fall out during cleaning.
pub(super) fn load(path: &Path) -> StatementResult<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(StatementError::read)?;

    let headers = reader.headers().map_err(StatementError::read)?.clone();
    let (category_idx, amount_idx) = super::resolve_columns(headers.iter())?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(StatementError::read)?;
        records.push(RawRecord::new(
            record.get(category_idx).unwrap_or(""),
            record.get(amount_idx).unwrap_or(""),
        ));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_basic_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(
            &temp_dir,
            "ledger.csv",
            "Date,Category,Amount\n2025-01-05,Sales Revenue,1000\n2025-01-07,Office Expense,-200\n",
        );

        let records = load(&path).unwrap();
        assert_eq!(
            records,
            vec![
                RawRecord::new("Sales Revenue", "1000"),
                RawRecord::new("Office Expense", "-200"),
            ]
        );
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(
            &temp_dir,
            "ledger.csv",
            "Memo,Amount,Category\nlunch,-15.50,Meals Expense\n",
        );

        let records = load(&path).unwrap();
        assert_eq!(records, vec![RawRecord::new("Meals Expense", "-15.50")]);
    }

    #[test]
    fn test_short_rows_load_with_empty_cells() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(
            &temp_dir,
            "ledger.csv",
            "Category,Amount\nSales Revenue\n",
        );

        let records = load(&path).unwrap();
        assert_eq!(records, vec![RawRecord::new("Sales Revenue", "")]);
    }

    #[test]
    fn test_missing_category_column() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(&temp_dir, "ledger.csv", "Date,Amount\n2025-01-05,1000\n");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, StatementError::MissingColumn("Category")));
    }

    #[test]
    fn test_empty_ledger_loads_no_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_csv(&temp_dir, "ledger.csv", "Category,Amount\n");

        let records = load(&path).unwrap();
        assert!(records.is_empty());
    }
}
