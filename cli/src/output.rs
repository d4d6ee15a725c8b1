//! Output formatting utilities
//!
//! The human-readable run summary is emitted through the logger by the core
//! orchestrator; this module only covers the machine-readable `--json`
//! report.

use anyhow::Result;
use tablediff_core::CompareReport;

/// JSON formatter for tablediff output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Print the full comparison report as pretty JSON on stdout.
    pub fn print_report(report: &CompareReport) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(report)?);
        Ok(())
    }
}
