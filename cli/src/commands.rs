//! Command implementation for the tablediff CLI

use crate::cli::Cli;
use crate::output::JsonFormatter;
use anyhow::Result;
use tablediff_core::introspect;
use tablediff_core::{compare, ComparisonSpec, DuckDbDialect, DuckDbEngine, TableRef};

/// Run the comparison described by the CLI arguments.
///
/// Returns the overall verdict: `true` when every pass reported zero
/// mismatches.
pub fn run(cli: Cli) -> Result<bool> {
    let table_a = TableRef::new(
        &cli.database_a,
        &cli.schema_a,
        &cli.table_a,
        &cli.table_a_update_ts,
    )
    .with_filter(&cli.table_a_filter);
    let table_b = TableRef::new(
        &cli.database_b,
        &cli.schema_b,
        &cli.table_b,
        &cli.table_b_update_ts,
    )
    .with_filter(&cli.table_b_filter);

    let pks = split_list(&cli.pks);
    let explicit_columns = cli.columns.as_deref().map(split_list).unwrap_or_default();
    let exclude_columns = split_list(&cli.exclude_columns);

    let engine = DuckDbEngine::connect(&cli.connection_string)?;
    let schema = introspect::list_columns(&engine, &table_a)?;

    let spec = ComparisonSpec::build(
        table_a,
        table_b,
        pks,
        explicit_columns,
        exclude_columns,
        &schema,
        cli.diff_target_schema,
        cli.max_last_update_ts,
    )?;

    let report = compare::compare(&engine, &DuckDbDialect, &spec)?;

    if cli.json {
        JsonFormatter::print_report(&report)?;
    }

    Ok(report.is_clean())
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("ID"), vec!["ID"]);
        assert_eq!(split_list("ID, REGION"), vec!["ID", "REGION"]);
        assert_eq!(split_list(""), Vec::<String>::new());
        assert_eq!(split_list("A,,B"), vec!["A", "B"]);
    }
}
