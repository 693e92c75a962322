//! Core data models for statement-cli

mod ledger;
mod money;

pub use ledger::{LedgerEntry, RawRecord};
pub use money::{Money, MoneyParseError};
