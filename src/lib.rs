//! statement-cli - Command-line income statement generator
//!
//! This library turns a tabular ledger of transactions into a formatted
//! income statement. Transactions are classified as revenue or expense by
//! keyword-matching their free-text category label, aggregated, and written
//! back out as a two-column spreadsheet.
//!
//! # Architecture
//!
//! The pipeline runs strictly forward through four stages:
//!
//! - `loader`: reads a ledger file (xlsx or csv) into raw records
//! - `services::cleaner`: coerces amounts to `Money`, drops malformed rows
//! - `reports`: classifies, aggregates, and lays out the statement
//! - `writer`: persists the statement as a spreadsheet
//!
//! Supporting modules: `config` (input/output paths), `error` (crate error
//! type), `models` (money and ledger rows), `display` (console previews).
//!
//! # Example
//!
//! ```rust,ignore
//! use statement::config::ReportConfig;
//!
//! let config = ReportConfig::default();
//! let raw = statement::loader::load_table(&config.input_path)?;
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod loader;
pub mod models;
pub mod reports;
pub mod services;
pub mod writer;

pub use error::{StatementError, StatementResult};
