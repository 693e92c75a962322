//! Income Statement
//!
//! Aggregates a cleaned ledger into revenue and expense totals and lays the
//! result out as the fixed line-item sequence of the report.

use std::collections::BTreeMap;

use crate::models::{LedgerEntry, Money};

/// One expense category with its positive summed magnitude
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseLine {
    /// Exact category text, as grouped
    pub category: String,
    /// Absolute value of the category's summed amounts
    pub amount: Money,
}

/// One line of the presentation table
///
/// Constructed once per run from the aggregates and never mutated after.
/// Section headers and spacers carry no amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// Line label (empty for spacers)
    pub line_item: String,
    /// Displayable amount, if the line has one
    pub amount: Option<Money>,
}

impl ReportLine {
    fn header(label: &str) -> Self {
        Self {
            line_item: label.to_string(),
            amount: None,
        }
    }

    fn spacer() -> Self {
        Self {
            line_item: String::new(),
            amount: None,
        }
    }

    fn item(label: impl Into<String>, amount: Money) -> Self {
        Self {
            line_item: label.into(),
            amount: Some(amount),
        }
    }
}

/// Aggregated income statement for one ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeStatement {
    /// Sum of amounts over revenue rows
    pub total_revenue: Money,
    /// Sum of amounts over expense rows; negative by data convention
    pub total_expenses_negative: Money,
    /// Expense magnitudes grouped by exact category text, descending
    pub expenses_by_category: Vec<ExpenseLine>,
    /// total_revenue + total_expenses_negative
    pub net_income: Money,
}

impl IncomeStatement {
    /// Aggregate a cleaned ledger
    ///
    /// Revenue and expense membership are independent keyword matches on the
    /// category; rows matching neither are ignored. Empty input yields zero
    /// totals and an empty grouping.
    pub fn from_entries(entries: &[LedgerEntry]) -> Self {
        let total_revenue: Money = entries
            .iter()
            .filter(|e| e.is_revenue())
            .map(|e| e.amount)
            .sum();

        let expense_entries: Vec<&LedgerEntry> =
            entries.iter().filter(|e| e.is_expense()).collect();

        let total_expenses_negative: Money = expense_entries.iter().map(|e| e.amount).sum();

        let mut by_category: BTreeMap<&str, Money> = BTreeMap::new();
        for entry in &expense_entries {
            *by_category
                .entry(entry.category.as_str())
                .or_insert_with(Money::zero) += entry.amount;
        }

        let mut expenses_by_category: Vec<ExpenseLine> = by_category
            .into_iter()
            .map(|(category, amount)| ExpenseLine {
                category: category.to_string(),
                amount: amount.abs(),
            })
            .collect();

        // Largest categories first; equal magnitudes order by category name
        expenses_by_category
            .sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));

        let net_income = total_revenue + total_expenses_negative;

        Self {
            total_revenue,
            total_expenses_negative,
            expenses_by_category,
            net_income,
        }
    }

    /// Lay the statement out as the report's line-item sequence
    pub fn lines(&self) -> Vec<ReportLine> {
        let mut lines = Vec::with_capacity(self.expenses_by_category.len() + 8);

        lines.push(ReportLine::header("Revenues:"));
        lines.push(ReportLine::item("  Sales Revenue", self.total_revenue));
        lines.push(ReportLine::spacer());

        lines.push(ReportLine::header("Expenses:"));
        for expense in &self.expenses_by_category {
            lines.push(ReportLine::item(
                format!("  {}", expense.category),
                expense.amount,
            ));
        }
        lines.push(ReportLine::spacer());

        // Expense total displays as a positive number
        lines.push(ReportLine::item(
            "Total Expenses",
            -self.total_expenses_negative,
        ));
        lines.push(ReportLine::spacer());

        lines.push(ReportLine::item("NET INCOME (LOSS)", self.net_income));

        lines
    }
}
