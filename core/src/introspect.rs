//! Schema introspection
//!
//! Reads the authoritative column listing for a table from the engine
//! catalog. Only table A is ever introspected for column discovery; table
//! B's structure is checked by the structure pass instead.

use crate::engine::SqlEngine;
use crate::error::{Result, TableDiffError};
use crate::spec::TableRef;

/// One column of a table: name plus declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
}

/// List the columns of `table` in schema order.
///
/// Fails with [`TableDiffError::SchemaLookup`] when the table is absent from
/// the catalog or the catalog itself cannot be read.
pub fn list_columns<E: SqlEngine + ?Sized>(engine: &E, table: &TableRef) -> Result<Vec<ColumnInfo>> {
    let columns = engine.list_columns(table).map_err(|e| {
        TableDiffError::schema_lookup(table.qualified_name(), e.to_string())
    })?;

    if columns.is_empty() {
        return Err(TableDiffError::schema_lookup(
            table.qualified_name(),
            "table not found in catalog",
        ));
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DuckDbEngine;

    #[test]
    fn test_lookup_of_missing_table_fails() {
        let engine = DuckDbEngine::connect(":memory:").unwrap();
        let table = TableRef::new("memory", "main", "nope", "UPDATED_AT");

        let err = list_columns(&engine, &table).unwrap_err();
        match err {
            TableDiffError::SchemaLookup { table, .. } => {
                assert_eq!(table, "memory.main.nope");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lookup_returns_declared_types() {
        let engine = DuckDbEngine::connect(":memory:").unwrap();
        engine
            .execute("CREATE TABLE t (ID INTEGER, AMOUNT DOUBLE)")
            .unwrap();

        let table = TableRef::new("memory", "main", "t", "UPDATED_AT");
        let columns = list_columns(&engine, &table).unwrap();

        assert_eq!(
            columns,
            vec![
                ColumnInfo {
                    name: "ID".to_string(),
                    data_type: "INTEGER".to_string()
                },
                ColumnInfo {
                    name: "AMOUNT".to_string(),
                    data_type: "DOUBLE".to_string()
                },
            ]
        );
    }
}
