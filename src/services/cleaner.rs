//! Ledger cleaning
//!
//! Coerces raw records into typed ledger entries. Rows whose amount cell
//! cannot be parsed as money are dropped whole, matching the source data
//! convention; the drop count is surfaced so the loss stays observable.

use crate::models::{LedgerEntry, Money, RawRecord};

/// Result of cleaning a raw ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedLedger {
    /// Rows that survived coercion
    pub entries: Vec<LedgerEntry>,
    /// Number of rows dropped for a non-numeric amount
    pub dropped_rows: usize,
}

/// Clean a raw ledger
///
/// Never fails; malformed rows are counted and discarded, not repaired.
pub fn clean(records: Vec<RawRecord>) -> CleanedLedger {
    let mut entries = Vec::with_capacity(records.len());
    let mut dropped_rows = 0;

    for record in records {
        match Money::parse(&record.amount) {
            Ok(amount) => entries.push(LedgerEntry::new(record.category, amount)),
            Err(_) => dropped_rows += 1,
        }
    }

    CleanedLedger {
        entries,
        dropped_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_parses_amounts() {
        let cleaned = clean(vec![
            RawRecord::new("Sales Revenue", "1000"),
            RawRecord::new("Office Expense", "-200.50"),
        ]);

        assert_eq!(cleaned.dropped_rows, 0);
        assert_eq!(
            cleaned.entries,
            vec![
                LedgerEntry::new("Sales Revenue", Money::from_cents(100000)),
                LedgerEntry::new("Office Expense", Money::from_cents(-20050)),
            ]
        );
    }

    #[test]
    fn test_malformed_rows_are_dropped_and_counted() {
        let cleaned = clean(vec![
            RawRecord::new("Sales Revenue", "1000"),
            RawRecord::new("Bad Row", "oops"),
            RawRecord::new("Another Bad Row", ""),
        ]);

        assert_eq!(cleaned.dropped_rows, 2);
        assert_eq!(cleaned.entries.len(), 1);
        assert_eq!(cleaned.entries[0].category, "Sales Revenue");
    }

    #[test]
    fn test_multibyte_amount_text_is_dropped_not_a_crash() {
        let cleaned = clean(vec![
            RawRecord::new("Misc Expense", "1.5€"),
            RawRecord::new("Sales Revenue", "1000"),
        ]);

        assert_eq!(cleaned.dropped_rows, 1);
        assert_eq!(cleaned.entries.len(), 1);
        assert_eq!(cleaned.entries[0].category, "Sales Revenue");
    }

    #[test]
    fn test_dropped_rows_are_gone_not_zeroed() {
        let cleaned = clean(vec![RawRecord::new("Bad Row", "n/a")]);
        assert!(cleaned.entries.is_empty());
        assert_eq!(cleaned.dropped_rows, 1);
    }

    #[test]
    fn test_empty_ledger() {
        let cleaned = clean(Vec::new());
        assert!(cleaned.entries.is_empty());
        assert_eq!(cleaned.dropped_rows, 0);
    }

    #[test]
    fn test_category_text_passes_through_unchanged() {
        let cleaned = clean(vec![RawRecord::new("  Misc Cost  ", "5")]);
        assert_eq!(cleaned.entries[0].category, "  Misc Cost  ");
    }
}
