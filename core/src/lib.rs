//! # tablediff-core
//!
//! Core library for tablediff - detects structural and data differences
//! between two SQL tables (possibly in different databases or schemas) by
//! materializing four fixed comparison passes into diff-result tables and
//! reducing the mismatch counts to a single verdict.
//!
//! This crate provides the comparison engine used by the CLI; it performs no
//! terminal I/O beyond `log` macros.

pub mod compare;
pub mod dialect;
pub mod engine;
pub mod error;
pub mod introspect;
pub mod query;
pub mod runner;
pub mod spec;

// Re-export the most commonly used types for convenience
pub use compare::{compare, CompareReport};
pub use dialect::{Dialect, DuckDbDialect};
pub use engine::{DuckDbEngine, SqlEngine};
pub use error::{Result, TableDiffError};
pub use introspect::ColumnInfo;
pub use query::DiffPass;
pub use runner::DiffResult;
pub use spec::{ComparisonSpec, TableRef};
