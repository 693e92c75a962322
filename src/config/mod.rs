//! Configuration for statement-cli
//!
//! The pipeline takes an explicit [`ReportConfig`] rather than hardcoded
//! file names. Defaults match the conventional ledger layout; values can be
//! overridden from an optional JSON settings file or from CLI flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{StatementError, StatementResult};

/// Input/output locations for one report run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Ledger file to read
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Report file to write (overwritten if present)
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("transactions.xlsx")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("income_statement_report.xlsx")
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from a JSON settings file, or fall back to the
    /// defaults when no file is given
    ///
    /// A path that is given but cannot be read or parsed is a configuration
    /// error; an omitted path is not.
    pub fn load_or_default(path: Option<&Path>) -> StatementResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|e| {
            StatementError::Config(format!(
                "Failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: ReportConfig = serde_json::from_str(&contents).map_err(|e| {
            StatementError::Config(format!(
                "Failed to parse settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Save configuration to a JSON settings file
    pub fn save(&self, path: &Path) -> StatementResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .map_err(|e| StatementError::Io(format!("Failed to write settings file: {}", e)))?;
        Ok(())
    }
}
