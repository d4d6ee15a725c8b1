//! Comparison configuration value objects

use crate::error::{Result, TableDiffError};
use crate::introspect::ColumnInfo;
use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;

/// Columns whose name starts with this prefix are internal/metadata columns
/// and never take part in value comparison.
pub const INTERNAL_COLUMN_PREFIX: char = '_';

/// Identifies one side of the comparison: a table plus the row filter and
/// last-update-timestamp column applied to it.
#[derive(Debug, Clone)]
pub struct TableRef {
    pub database: String,
    pub schema: String,
    pub table: String,
    /// Row filter predicate applied inside every pass subquery.
    pub filter: String,
    /// Column holding the row's last update timestamp.
    pub update_ts_column: String,
}

impl TableRef {
    pub fn new(
        database: impl Into<String>,
        schema: impl Into<String>,
        table: impl Into<String>,
        update_ts_column: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            schema: schema.into(),
            table: table.into(),
            filter: "1=1".to_string(),
            update_ts_column: update_ts_column.into(),
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Fully qualified `database.schema.table` name.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}.{}", self.database, self.schema, self.table)
    }
}

/// Full configuration of one comparison run, built once per invocation.
#[derive(Debug, Clone)]
pub struct ComparisonSpec {
    pub table_a: TableRef,
    pub table_b: TableRef,
    /// Join key for row identity between A and B.
    pub pk_columns: Vec<String>,
    /// Columns compared value-by-value; disjoint from `pk_columns`.
    pub columns: Vec<String>,
    /// Declared type per column of table A, in schema order.
    pub column_types: IndexMap<String, String>,
    /// Schema holding the materialized diff-result tables.
    pub target_schema: String,
    /// Rows whose greatest last-update timestamp is at or after this cutoff
    /// are excluded from the record and value passes.
    pub max_last_update_ts: String,
}

impl ComparisonSpec {
    /// Build a spec from the run configuration and table A's introspected
    /// schema.
    ///
    /// When `explicit_columns` is empty the comparable set is derived from
    /// the schema: every column except primary keys, internal columns
    /// (leading underscore) and the exclusion list. An explicit list is
    /// taken as-is apart from primary-key columns, which are always removed
    /// to keep the key and value sets disjoint.
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        table_a: TableRef,
        table_b: TableRef,
        pk_columns: Vec<String>,
        explicit_columns: Vec<String>,
        exclude_columns: Vec<String>,
        schema: &[ColumnInfo],
        target_schema: impl Into<String>,
        max_last_update_ts: impl Into<String>,
    ) -> Result<Self> {
        let max_last_update_ts = max_last_update_ts.into();
        validate_cutoff(&max_last_update_ts)?;

        let columns = if explicit_columns.is_empty() {
            schema
                .iter()
                .map(|c| &c.name)
                .filter(|name| !name.starts_with(INTERNAL_COLUMN_PREFIX))
                .filter(|name| !pk_columns.contains(name))
                .filter(|name| !exclude_columns.contains(name))
                .cloned()
                .collect()
        } else {
            explicit_columns
                .into_iter()
                .filter(|name| !pk_columns.contains(name))
                .collect()
        };

        let column_types = schema
            .iter()
            .map(|c| (c.name.clone(), c.data_type.clone()))
            .collect();

        Ok(Self {
            table_a,
            table_b,
            pk_columns,
            columns,
            column_types,
            target_schema: target_schema.into(),
            max_last_update_ts,
        })
    }
}

fn validate_cutoff(value: &str) -> Result<()> {
    if NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
    {
        return Ok(());
    }
    Err(TableDiffError::invalid_input(format!(
        "cutoff timestamp '{value}' is neither 'YYYY-MM-DD HH:MM:SS' nor 'YYYY-MM-DD'"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, data_type: &str) -> ColumnInfo {
        ColumnInfo {
            name: name.to_string(),
            data_type: data_type.to_string(),
        }
    }

    fn orders_schema() -> Vec<ColumnInfo> {
        vec![
            column("ID", "INTEGER"),
            column("_meta", "VARCHAR"),
            column("NAME", "VARCHAR"),
            column("AMOUNT", "DOUBLE"),
        ]
    }

    fn table(database: &str) -> TableRef {
        TableRef::new(database, "src", "ORDERS", "UPDATED_AT")
    }

    #[test]
    fn test_derived_columns_exclude_pk_and_internal() {
        let spec = ComparisonSpec::build(
            table("dwh_a"),
            table("dwh_b"),
            vec!["ID".to_string()],
            vec![],
            vec![],
            &orders_schema(),
            "diff",
            "2024-01-01 00:00:00",
        )
        .unwrap();

        assert_eq!(spec.columns, vec!["NAME", "AMOUNT"]);
    }

    #[test]
    fn test_derived_columns_respect_exclusions() {
        let spec = ComparisonSpec::build(
            table("dwh_a"),
            table("dwh_b"),
            vec!["ID".to_string()],
            vec![],
            vec!["NAME".to_string()],
            &orders_schema(),
            "diff",
            "2024-01-01 00:00:00",
        )
        .unwrap();

        assert_eq!(spec.columns, vec!["AMOUNT"]);
    }

    #[test]
    fn test_explicit_columns_drop_primary_keys() {
        let spec = ComparisonSpec::build(
            table("dwh_a"),
            table("dwh_b"),
            vec!["ID".to_string()],
            vec!["ID".to_string(), "AMOUNT".to_string()],
            vec![],
            &orders_schema(),
            "diff",
            "2024-01-01 00:00:00",
        )
        .unwrap();

        assert_eq!(spec.columns, vec!["AMOUNT"]);
    }

    #[test]
    fn test_column_types_keep_schema_order() {
        let spec = ComparisonSpec::build(
            table("dwh_a"),
            table("dwh_b"),
            vec!["ID".to_string()],
            vec![],
            vec![],
            &orders_schema(),
            "diff",
            "2024-01-01",
        )
        .unwrap();

        let names: Vec<_> = spec.column_types.keys().cloned().collect();
        assert_eq!(names, vec!["ID", "_meta", "NAME", "AMOUNT"]);
        assert_eq!(spec.column_types["AMOUNT"], "DOUBLE");
    }

    #[test]
    fn test_cutoff_must_parse() {
        let result = ComparisonSpec::build(
            table("dwh_a"),
            table("dwh_b"),
            vec!["ID".to_string()],
            vec![],
            vec![],
            &orders_schema(),
            "diff",
            "yesterday",
        );

        assert!(matches!(result, Err(TableDiffError::InvalidInput(_))));
    }

    #[test]
    fn test_default_filter_is_always_true() {
        let table = table("dwh_a");
        assert_eq!(table.filter, "1=1");
        assert_eq!(table.qualified_name(), "dwh_a.src.ORDERS");
    }
}
