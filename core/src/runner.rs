//! Pass execution
//!
//! Runs a single comparison pass: build the statement, materialize the
//! output table, count the mismatching rows it holds.

use crate::dialect::Dialect;
use crate::engine::SqlEngine;
use crate::error::Result;
use crate::query::{self, DiffPass};
use crate::spec::ComparisonSpec;
use serde::Serialize;

/// Outcome of one comparison pass.
#[derive(Debug, Clone, Serialize)]
pub struct DiffResult {
    pub pass: String,
    pub output_table: String,
    pub mismatches: i64,
}

impl DiffResult {
    pub fn is_clean(&self) -> bool {
        self.mismatches == 0
    }
}

/// Build, materialize and count one pass.
///
/// Replaces the pass's output table, then counts its rows. Engine failures
/// surface as [`crate::error::TableDiffError::Execution`] with the failing
/// statement attached.
pub fn run_pass<E: SqlEngine + ?Sized>(
    engine: &E,
    dialect: &dyn Dialect,
    pass: &DiffPass,
    spec: &ComparisonSpec,
) -> Result<DiffResult> {
    let statement = query::build(pass, spec, dialect)?;
    log::debug!("Running SQL: {statement}");
    engine.execute(&statement)?;

    let output_table = pass.qualified_output_table(spec);
    let count_statement = dialect.count_rows(&output_table);
    log::debug!("Running SQL: {count_statement}");
    let mismatches = engine.count(&count_statement)?;

    Ok(DiffResult {
        pass: pass.label(),
        output_table,
        mismatches,
    })
}
