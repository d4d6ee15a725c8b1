//! Error types for tablediff operations

use thiserror::Error;

/// Result type alias using [`TableDiffError`]
pub type Result<T> = std::result::Result<T, TableDiffError>;

/// Errors that abort a comparison run
///
/// Mismatches found by a pass are never errors; they are ordinary outcomes
/// reported through the pass results.
#[derive(Error, Debug)]
pub enum TableDiffError {
    /// The table's schema could not be read from the engine catalog
    #[error("schema lookup failed for {table}: {reason}")]
    SchemaLookup { table: String, reason: String },

    /// The comparison spec is malformed for the requested pass
    #[error("cannot build '{pass}' query: {reason}")]
    QueryBuild { pass: String, reason: String },

    /// The engine rejected a statement; carries the statement for diagnosis
    #[error("statement execution failed: {source}\nstatement was: {statement}")]
    Execution {
        statement: String,
        #[source]
        source: duckdb::Error,
    },

    /// Invalid configuration or user input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TableDiffError {
    pub fn schema_lookup(table: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SchemaLookup {
            table: table.into(),
            reason: reason.into(),
        }
    }

    pub fn query_build(pass: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::QueryBuild {
            pass: pass.into(),
            reason: reason.into(),
        }
    }

    pub fn execution(statement: impl Into<String>, source: duckdb::Error) -> Self {
        Self::Execution {
            statement: statement.into(),
            source,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
