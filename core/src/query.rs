//! Comparison pass query building
//!
//! Each of the four passes is a variant of [`DiffPass`]; [`build`] renders a
//! pass against a dialect into one statement that materializes the pass's
//! mismatching rows into its output table. Output tables are named after
//! table A plus the pass label, so re-running a comparison replaces them.

use crate::dialect::Dialect;
use crate::error::{Result, TableDiffError};
use crate::spec::{ComparisonSpec, TableRef};

/// One of the four fixed comparison passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffPass {
    /// Declared-type differences between A's and B's catalogs.
    Structure,
    /// Primary-key tuples present in B but absent from A.
    MissingRecords,
    /// Primary-key tuples present in A but absent from B.
    AdditionalRecords,
    /// Transformed-value differences for one column, over rows present on
    /// both sides.
    ColumnValues { column: String },
}

impl DiffPass {
    /// Label used in log lines and output table names.
    pub fn label(&self) -> String {
        match self {
            Self::Structure => "structures mismatches".to_string(),
            Self::MissingRecords => "records missing".to_string(),
            Self::AdditionalRecords => "additional records".to_string(),
            Self::ColumnValues { column } => format!("mismatches on column {column}"),
        }
    }

    /// Output table name: table A's name plus the pass label. All four
    /// passes are table-A-prefixed; this is the on-disk contract operators
    /// rely on, additional-records included.
    pub fn output_table(&self, spec: &ComparisonSpec) -> String {
        format!("{}_{}", spec.table_a.table, self.label().replace(' ', "_"))
    }

    /// Output table qualified with the diff target schema.
    pub fn qualified_output_table(&self, spec: &ComparisonSpec) -> String {
        format!("{}.{}", spec.target_schema, self.output_table(spec))
    }
}

/// Render the statement materializing `pass` for `spec`.
pub fn build(pass: &DiffPass, spec: &ComparisonSpec, dialect: &dyn Dialect) -> Result<String> {
    if spec.pk_columns.is_empty() {
        return Err(TableDiffError::query_build(
            pass.label(),
            "primary-key column set is empty",
        ));
    }

    let select = match pass {
        DiffPass::Structure => structure_select(spec, dialect),
        DiffPass::MissingRecords => one_sided_select(spec, dialect, Side::B),
        DiffPass::AdditionalRecords => one_sided_select(spec, dialect, Side::A),
        DiffPass::ColumnValues { column } => column_values_select(spec, dialect, column)?,
    };

    Ok(dialect.create_or_replace_table_as(&pass.qualified_output_table(spec), &select))
}

/// Which table's rows a one-sided pass keeps.
#[derive(Debug, Clone, Copy)]
enum Side {
    A,
    B,
}

fn pk_projection(alias: &str, pk_columns: &[String]) -> String {
    pk_columns
        .iter()
        .map(|pk| format!("{alias}.{pk}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn pk_join_condition(pk_columns: &[String]) -> String {
    pk_columns
        .iter()
        .map(|pk| format!("a.{pk} = b.{pk}"))
        .collect::<Vec<_>>()
        .join(" AND ")
}

fn pk_absent_condition(alias: &str, pk_columns: &[String]) -> String {
    pk_columns
        .iter()
        .map(|pk| format!("{alias}.{pk} IS NULL"))
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Filtered projection of a table's primary key plus its last-update
/// timestamp, used as the join input of the record and value passes.
fn filtered_pk_subquery(table: &TableRef, alias: &str, pk_columns: &[String]) -> String {
    format!(
        "SELECT {}, {alias}.{} AS last_update_ts FROM {} {alias} WHERE {}",
        pk_projection(alias, pk_columns),
        table.update_ts_column,
        table.qualified_name(),
        table.filter
    )
}

/// Cutoff predicate excluding rows still converging on either side.
fn freshness_condition(spec: &ComparisonSpec, dialect: &dyn Dialect) -> String {
    format!(
        "{} < '{}'",
        dialect.greatest("a.last_update_ts", "b.last_update_ts"),
        spec.max_last_update_ts
    )
}

fn structure_select(spec: &ComparisonSpec, dialect: &dyn Dialect) -> String {
    let a_catalog = dialect.catalog_columns(&spec.table_a, &spec.columns);
    let b_catalog = dialect.catalog_columns(&spec.table_b, &spec.columns);
    format!(
        "SELECT COALESCE(a.column_name, b.column_name) AS column_name, \
         a.data_type AS a_data_type, b.data_type AS b_data_type\n\
         FROM ({a_catalog}) a\n\
         FULL OUTER JOIN ({b_catalog}) b ON a.column_name = b.column_name\n\
         WHERE {}",
        dialect.is_distinct_from("a.data_type", "b.data_type")
    )
}

fn one_sided_select(spec: &ComparisonSpec, dialect: &dyn Dialect, keep: Side) -> String {
    let (keep_table, keep_alias, probe_table, probe_alias) = match keep {
        Side::B => (&spec.table_b, "b", &spec.table_a, "a"),
        Side::A => (&spec.table_a, "a", &spec.table_b, "b"),
    };
    let keep_subquery = filtered_pk_subquery(keep_table, keep_alias, &spec.pk_columns);
    let probe_subquery = filtered_pk_subquery(probe_table, probe_alias, &spec.pk_columns);
    format!(
        "SELECT {}\n\
         FROM ({keep_subquery}) {keep_alias}\n\
         LEFT OUTER JOIN ({probe_subquery}) {probe_alias} ON {}\n\
         WHERE {} AND {}",
        pk_projection(keep_alias, &spec.pk_columns),
        pk_join_condition(&spec.pk_columns),
        pk_absent_condition(probe_alias, &spec.pk_columns),
        freshness_condition(spec, dialect)
    )
}

fn column_values_select(
    spec: &ComparisonSpec,
    dialect: &dyn Dialect,
    column: &str,
) -> Result<String> {
    let declared_type = spec.column_types.get(column).ok_or_else(|| {
        TableDiffError::query_build(
            format!("mismatches on column {column}"),
            format!("column {column} has no declared type in table A's schema"),
        )
    })?;

    // Float columns compare rounded values; everything else compares the
    // canonical text representation. The structure pass covers declared-type
    // differences separately.
    let transformed = if is_float_type(declared_type) {
        dialect.round(column)
    } else {
        dialect.cast_to_text(column)
    };

    let side_subquery = |table: &TableRef, alias: &str| {
        format!(
            "SELECT {}, {transformed} AS {column}, {alias}.{} AS last_update_ts \
             FROM {} {alias} WHERE {}",
            pk_projection(alias, &spec.pk_columns),
            table.update_ts_column,
            table.qualified_name(),
            table.filter
        )
    };
    let a_subquery = side_subquery(&spec.table_a, "a");
    let b_subquery = side_subquery(&spec.table_b, "b");

    Ok(format!(
        "SELECT {}, a.{column} AS a_{column}, b.{column} AS b_{column}\n\
         FROM ({a_subquery}) a\n\
         JOIN ({b_subquery}) b ON {}\n\
         WHERE {} AND {}",
        pk_projection("a", &spec.pk_columns),
        pk_join_condition(&spec.pk_columns),
        dialect.is_distinct_from(&format!("a.{column}"), &format!("b.{column}")),
        freshness_condition(spec, dialect)
    ))
}

/// Whether a declared type selects the rounding transform.
fn is_float_type(declared_type: &str) -> bool {
    let upper = declared_type.trim().to_ascii_uppercase();
    upper.starts_with("FLOAT") || upper.starts_with("DOUBLE") || upper.starts_with("REAL")
}
