//! Business logic layer

pub mod cleaner;

pub use cleaner::{clean, CleanedLedger};
