//! Employees table bootstrap
//!
//! The store is a single flat table. `ensure_schema` creates it when absent
//! and leaves an existing table untouched; there is no migration history.
//!
//! `Id` is declared `INTEGER PRIMARY KEY AUTOINCREMENT`, which makes it an
//! alias of `ROWID` that is never reused after a delete. Queries address rows
//! through `ROWID`, so databases created without the `Id` column keep working.
//!
//! `Value` only accepts integers, so an overflowing sum can never be stored
//! as REAL.

use tracing::info;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// Name of the table holding employee records
pub const EMPLOYEES_TABLE: &str = "Employees";

const CREATE_EMPLOYEES: &str = r#"
    CREATE TABLE IF NOT EXISTS Employees (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        Name TEXT NOT NULL,
        Value INTEGER NOT NULL DEFAULT 0 CHECK (typeof(Value) = 'integer')
    )
"#;

/// Creates the employees table if it does not exist
///
/// # Errors
///
/// Returns `DatabaseError::SchemaFailed` if the statement cannot be executed
pub async fn ensure_schema(pool: &DatabasePool) -> Result<(), DatabaseError> {
    sqlx::query(CREATE_EMPLOYEES)
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::SchemaFailed(e.to_string()))?;

    info!(table = EMPLOYEES_TABLE, "Schema ready");
    Ok(())
}
