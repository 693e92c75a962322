//! Console previews
//!
//! Renders the raw-row preview and the income statement for terminal
//! display. Both are informational only; the written file is the output.

use tabled::{settings::Style, Table};

use crate::models::RawRecord;
use crate::reports::ReportLine;

/// Number of raw rows shown in the preview
pub const PREVIEW_ROWS: usize = 5;

/// Format the head of the raw ledger as a bordered table
pub fn format_raw_preview(records: &[RawRecord]) -> String {
    if records.is_empty() {
        return "No data rows found.\n".to_string();
    }

    let mut table = Table::new(records.iter().take(PREVIEW_ROWS));
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format the income statement lines for terminal display
pub fn format_report(lines: &[ReportLine]) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:<30} {:>14}\n", "Line Item", "Amount"));
    output.push_str(&"-".repeat(45));
    output.push('\n');

    for line in lines {
        match line.amount {
            Some(amount) => {
                output.push_str(&format!("{:<30} {:>14}\n", line.line_item, amount));
            }
            None => {
                output.push_str(&format!("{}\n", line.line_item));
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::IncomeStatement;

    #[test]
    fn test_raw_preview_truncates_to_head() {
        let records: Vec<RawRecord> = (0..10)
            .map(|i| RawRecord::new(format!("Category {}", i), "100"))
            .collect();

        let preview = format_raw_preview(&records);
        assert!(preview.contains("Category 4"));
        assert!(!preview.contains("Category 5"));
    }

    #[test]
    fn test_raw_preview_empty_ledger() {
        let preview = format_raw_preview(&[]);
        assert!(preview.contains("No data rows found"));
    }

    #[test]
    fn test_report_formatting() {
        let entries = vec![
            crate::models::LedgerEntry::new("Sales Revenue", Money::from_cents(100000)),
            crate::models::LedgerEntry::new("Rent Expense", Money::from_cents(-40000)),
        ];
        let lines = IncomeStatement::from_entries(&entries).lines();
        let formatted = format_report(&lines);

        assert!(formatted.contains("Revenues:"));
        assert!(formatted.contains("  Sales Revenue"));
        assert!(formatted.contains("$1000.00"));
        assert!(formatted.contains("Total Expenses"));
        assert!(formatted.contains("$400.00"));
        assert!(formatted.contains("NET INCOME (LOSS)"));
        assert!(formatted.contains("$600.00"));
    }
}
