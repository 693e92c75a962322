//! Terminal display formatting

mod report;

pub use report::{format_raw_preview, format_report, PREVIEW_ROWS};
