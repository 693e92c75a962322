//! Ledger row models
//!
//! A ledger row passes through two shapes: [`RawRecord`] as loaded from the
//! source file (all text, nothing validated) and [`LedgerEntry`] after
//! cleaning (amount coerced to [`Money`]). Classification happens on the
//! cleaned entry via keyword predicates over the category label.

use crate::models::Money;
use tabled::Tabled;

/// Category keywords that mark a transaction as revenue
const REVENUE_KEYWORDS: &[&str] = &["revenue"];

/// Category keywords that mark a transaction as an expense
const EXPENSE_KEYWORDS: &[&str] = &["expense", "cost", "supplies"];

/// One row of the source ledger, as loaded
///
/// Both fields are the textual rendering of the source cell: numeric cells
/// are rendered to text and blank cells become the empty string, so
/// downstream pattern matching never sees a non-text value.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct RawRecord {
    /// Free-text category label
    #[tabled(rename = "Category")]
    pub category: String,
    /// Amount cell text, not yet validated as numeric
    #[tabled(rename = "Amount")]
    pub amount: String,
}

impl RawRecord {
    /// Create a raw record from cell text
    pub fn new(category: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount: amount.into(),
        }
    }
}

/// One cleaned ledger row: category text plus a numeric amount
///
/// Expenses are conventionally recorded as negative amounts in the source
/// data. The revenue and expense predicates are independent substring
/// matches, so a category containing keywords from both sets counts toward
/// both sides; the keyword sets are chosen not to overlap in practice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Free-text category label
    pub category: String,
    /// Signed transaction amount
    pub amount: Money,
}

impl LedgerEntry {
    /// Create a ledger entry
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    /// True if the category labels this row as revenue
    /// (case-insensitive substring match)
    pub fn is_revenue(&self) -> bool {
        self.matches_any(REVENUE_KEYWORDS)
    }

    /// True if the category labels this row as an expense
    /// (case-insensitive substring match on any keyword)
    pub fn is_expense(&self) -> bool {
        self.matches_any(EXPENSE_KEYWORDS)
    }

    fn matches_any(&self, keywords: &[&str]) -> bool {
        let category = self.category.to_lowercase();
        keywords.iter().any(|kw| category.contains(kw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str) -> LedgerEntry {
        LedgerEntry::new(category, Money::from_cents(100))
    }

    #[test]
    fn test_revenue_matching_is_case_insensitive() {
        assert!(entry("Sales Revenue").is_revenue());
        assert!(entry("REVENUE").is_revenue());
        assert!(entry("revenue").is_revenue());
        assert!(entry("Other revenue streams").is_revenue());
    }

    #[test]
    fn test_expense_matching_covers_all_keywords() {
        assert!(entry("Office Expense").is_expense());
        assert!(entry("Travel Cost").is_expense());
        assert!(entry("Office Supplies").is_expense());
        assert!(entry("COST OF GOODS").is_expense());
    }

    #[test]
    fn test_unmatched_category_is_neither() {
        let e = entry("Owner Draw");
        assert!(!e.is_revenue());
        assert!(!e.is_expense());
    }

    #[test]
    fn test_empty_category_is_neither() {
        let e = entry("");
        assert!(!e.is_revenue());
        assert!(!e.is_expense());
    }

    #[test]
    fn test_overlapping_category_matches_both() {
        // Predicates are independent; overlap is possible and not guarded
        let e = entry("Revenue Cost Recovery");
        assert!(e.is_revenue());
        assert!(e.is_expense());
    }
}
