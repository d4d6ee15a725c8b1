//! Dialect-specific SQL rendering
//!
//! The four comparison passes are assembled from dialect-neutral structure in
//! [`crate::query`]; every fragment whose syntax varies between engines
//! (null-safe distinctness, casts, the catalog column listing, table
//! materialization) renders through this trait. The default method bodies
//! follow DuckDB syntax; another engine only needs to override the fragments
//! it spells differently.

use crate::spec::TableRef;

/// Renders the engine-specific SQL fragments used by the comparison passes.
pub trait Dialect {
    /// Null-safe "values differ" predicate.
    fn is_distinct_from(&self, left: &str, right: &str) -> String {
        format!("{left} IS DISTINCT FROM {right}")
    }

    /// Canonical text representation of an expression.
    fn cast_to_text(&self, expr: &str) -> String {
        format!("CAST({expr} AS VARCHAR)")
    }

    /// Round an expression to the nearest integer.
    fn round(&self, expr: &str) -> String {
        format!("ROUND({expr})")
    }

    /// Largest of the two operands; a NULL on one side yields the other.
    fn greatest(&self, left: &str, right: &str) -> String {
        format!("greatest(COALESCE({left}, {right}), COALESCE({right}, {left}))")
    }

    /// Materialize a select into `table`, replacing any prior table of the
    /// same name.
    fn create_or_replace_table_as(&self, table: &str, select: &str) -> String {
        format!("CREATE OR REPLACE TABLE {table} AS SELECT * FROM (\n{select}\n)")
    }

    /// Idempotent creation of the diff target schema.
    fn create_schema_if_not_exists(&self, schema: &str) -> String {
        format!("CREATE SCHEMA IF NOT EXISTS {schema}")
    }

    /// Subquery listing `(column_name, data_type)` for `table` from the
    /// engine catalog, restricted to the given column names.
    fn catalog_columns(&self, table: &TableRef, columns: &[String]) -> String {
        let restriction = if columns.is_empty() {
            // empty comparable set: match nothing
            "1=0".to_string()
        } else {
            let in_list = columns
                .iter()
                .map(|c| format!("'{c}'"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("column_name IN ({in_list})")
        };
        format!(
            "SELECT column_name, data_type FROM {}.information_schema.columns \
             WHERE table_name = '{}' AND table_schema = '{}' AND {}",
            table.database, table.table, table.schema, restriction
        )
    }

    /// Count query over a materialized output table.
    fn count_rows(&self, table: &str) -> String {
        format!("SELECT count(*) FROM {table}")
    }
}

/// DuckDB rendering; the trait defaults are written in its syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuckDbDialect;

impl Dialect for DuckDbDialect {}
