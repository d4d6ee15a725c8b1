//! Command-line interface for tablediff

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tablediff")]
#[command(about = "Compare two SQL tables and materialize their differences")]
#[command(version)]
pub struct Cli {
    /// Connection descriptor for the SQL engine
    #[arg(long, env = "COMPARE_CONNECTION_STRING")]
    pub connection_string: String,

    /// Database A name
    #[arg(long, env = "COMPARE_DATABASE_A")]
    pub database_a: String,

    /// Database B name
    #[arg(long, env = "COMPARE_DATABASE_B")]
    pub database_b: String,

    /// Schema A name
    #[arg(long, env = "COMPARE_SCHEMA_A")]
    pub schema_a: String,

    /// Schema B name
    #[arg(long, env = "COMPARE_SCHEMA_B")]
    pub schema_b: String,

    /// Table A name
    #[arg(long)]
    pub table_a: String,

    /// Table A filter
    #[arg(long, default_value = "1=1")]
    pub table_a_filter: String,

    /// Table A last update timestamp column
    #[arg(long)]
    pub table_a_update_ts: String,

    /// Table B name
    #[arg(long)]
    pub table_b: String,

    /// Table B filter
    #[arg(long, default_value = "1=1")]
    pub table_b_filter: String,

    /// Table B last update timestamp column
    #[arg(long)]
    pub table_b_update_ts: String,

    /// Comma-separated list of primary-key columns
    #[arg(long, default_value = "ID")]
    pub pks: String,

    /// Comma-separated list of columns to compare (default: derived from table A)
    #[arg(long)]
    pub columns: Option<String>,

    /// Comma-separated list of columns to exclude from comparison
    #[arg(long, default_value = "")]
    pub exclude_columns: String,

    /// Target schema holding the diff-result tables
    #[arg(long, env = "COMPARE_TARGET_SCHEMA")]
    pub diff_target_schema: String,

    /// Rows updated at or after this timestamp are ignored
    #[arg(long)]
    pub max_last_update_ts: String,

    /// Emit the comparison report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
