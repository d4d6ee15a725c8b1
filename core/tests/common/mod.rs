//! Common test fixtures: an in-memory engine with two attached catalogs

use tablediff_core::introspect;
use tablediff_core::{ComparisonSpec, DuckDbEngine, SqlEngine, TableRef};

/// Cutoff used by every fixture spec; fixture rows are either well before or
/// at/after this boundary.
pub const CUTOFF: &str = "2024-06-01 00:00:00";

/// Timestamp safely before the cutoff.
pub const SETTLED_TS: &str = "2024-01-15 10:00:00";

/// Timestamp exactly at the cutoff boundary.
pub const CONVERGING_TS: &str = "2024-06-01 00:00:00";

/// Engine with catalogs `dwh_a` and `dwh_b`, each holding a `src` schema.
pub fn fixture_engine() -> DuckDbEngine {
    let engine = DuckDbEngine::connect(":memory:").expect("failed to open engine");
    for statement in [
        "ATTACH ':memory:' AS dwh_a",
        "ATTACH ':memory:' AS dwh_b",
        "CREATE SCHEMA dwh_a.src",
        "CREATE SCHEMA dwh_b.src",
    ] {
        engine
            .execute(statement)
            .expect("failed to prepare fixture catalogs");
    }
    engine
}

/// Create the ORDERS fixture table in one catalog. `amount_type` lets a test
/// introduce a structural difference on the B side.
pub fn create_orders(engine: &DuckDbEngine, database: &str, amount_type: &str) {
    engine
        .execute(&format!(
            "CREATE TABLE {database}.src.ORDERS (\
             ID INTEGER, NAME VARCHAR, AMOUNT {amount_type}, \
             UPDATED_AT TIMESTAMP, _LOADED_AT TIMESTAMP)"
        ))
        .expect("failed to create fixture table");
}

pub fn insert_order(
    engine: &DuckDbEngine,
    database: &str,
    id: i32,
    name: &str,
    amount: &str,
    updated_at: &str,
) {
    engine
        .execute(&format!(
            "INSERT INTO {database}.src.ORDERS VALUES \
             ({id}, '{name}', {amount}, TIMESTAMP '{updated_at}', TIMESTAMP '2024-01-01 00:00:00')"
        ))
        .expect("failed to insert fixture row");
}

/// Spec over the two ORDERS fixtures with derived columns, PK `ID` and the
/// fixture cutoff.
pub fn orders_spec(engine: &DuckDbEngine) -> ComparisonSpec {
    let table_a = TableRef::new("dwh_a", "src", "ORDERS", "UPDATED_AT");
    let table_b = TableRef::new("dwh_b", "src", "ORDERS", "UPDATED_AT");
    let schema = introspect::list_columns(engine, &table_a).expect("failed to introspect table A");

    ComparisonSpec::build(
        table_a,
        table_b,
        vec!["ID".to_string()],
        vec![],
        vec![],
        &schema,
        "diff",
        CUTOFF,
    )
    .expect("failed to build fixture spec")
}
