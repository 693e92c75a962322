//! Report generation

mod income_statement;

pub use income_statement::{ExpenseLine, IncomeStatement, ReportLine};
