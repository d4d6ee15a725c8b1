//! Diff orchestration
//!
//! Runs the fixed pass sequence (structure, missing records, additional
//! records, one value pass per comparable column) and folds the results into
//! an overall verdict. Mismatches never stop the run; engine failures abort
//! it immediately.

use crate::dialect::Dialect;
use crate::engine::SqlEngine;
use crate::error::Result;
use crate::query::DiffPass;
use crate::runner::{run_pass, DiffResult};
use crate::spec::ComparisonSpec;
use serde::Serialize;

/// Full report of one comparison run.
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub table_a: String,
    pub table_b: String,
    pub target_schema: String,
    pub passes: Vec<DiffResult>,
    pub clean: bool,
}

impl CompareReport {
    /// Overall verdict: every pass reported zero mismatches.
    pub fn is_clean(&self) -> bool {
        self.clean
    }
}

/// Run all comparison passes for `spec` and report per-pass and overall
/// results.
pub fn compare<E: SqlEngine + ?Sized>(
    engine: &E,
    dialect: &dyn Dialect,
    spec: &ComparisonSpec,
) -> Result<CompareReport> {
    log::info!(
        "Comparing tables {} (A) & {} (B):",
        spec.table_a.qualified_name(),
        spec.table_b.qualified_name()
    );
    log::debug!("Comparison spec: {spec:?}");

    let ensure_schema = dialect.create_schema_if_not_exists(&spec.target_schema);
    log::debug!("Running SQL: {ensure_schema}");
    engine.execute(&ensure_schema)?;

    let mut pending = vec![
        DiffPass::Structure,
        DiffPass::MissingRecords,
        DiffPass::AdditionalRecords,
    ];
    pending.extend(spec.columns.iter().map(|column| DiffPass::ColumnValues {
        column: column.clone(),
    }));

    let mut passes = Vec::with_capacity(pending.len());
    for pass in &pending {
        let label = pass.label();
        log::info!("  Checking for {label}...");

        let result = run_pass(engine, dialect, pass, spec)?;
        if result.is_clean() {
            log::info!("  No {label} ✅");
        } else {
            log::info!("  {label} ❌: {} mismatches", result.mismatches);
        }
        passes.push(result);
    }

    let clean = passes.iter().all(DiffResult::is_clean);
    let report = CompareReport {
        table_a: spec.table_a.qualified_name(),
        table_b: spec.table_b.qualified_name(),
        target_schema: spec.target_schema.clone(),
        passes,
        clean,
    };

    if report.clean {
        log::info!(
            "Tables {} (A) & {} (B) are similar ✅",
            report.table_a,
            report.table_b
        );
    } else {
        log::info!(
            "Tables {} (A) & {} (B) are different ❌. Checkout the mismatches details in the schema {}",
            report.table_a,
            report.table_b,
            report.target_schema
        );
    }

    Ok(report)
}
