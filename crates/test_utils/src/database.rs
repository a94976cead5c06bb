//! Database Test Utilities
//!
//! Each `TestDatabase` is a SQLite file inside its own temporary directory,
//! with the employees schema already applied. The directory is removed when
//! the value drops, so tests never share state.

use std::collections::BTreeMap;
use std::path::PathBuf;

use infra_db::adapters::SqliteEmployeeAdapter;
use infra_db::schema::ensure_schema;
use infra_db::{create_pool, DatabaseConfig, DatabasePool};
use tempfile::TempDir;

/// Boxed error used by test setup helpers
pub type TestError = Box<dyn std::error::Error + Send + Sync>;

/// A throwaway SQLite database for a single test
pub struct TestDatabase {
    _dir: TempDir,
    pub path: PathBuf,
    pub pool: DatabasePool,
}

impl TestDatabase {
    /// Creates a fresh database file with the schema applied
    ///
    /// # Errors
    ///
    /// Returns an error if the temp directory, pool, or schema cannot be
    /// created
    pub async fn new() -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("employees.db");

        let pool = create_pool(DatabaseConfig::for_path(&path).max_connections(4)).await?;
        ensure_schema(&pool).await?;

        Ok(Self {
            _dir: dir,
            path,
            pool,
        })
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Returns an employee adapter backed by this database
    pub fn adapter(&self) -> SqliteEmployeeAdapter {
        SqliteEmployeeAdapter::new(self.pool.clone())
    }

    /// Inserts rows directly, bypassing the adapter
    ///
    /// # Returns
    ///
    /// The assigned row identifiers, in input order
    pub async fn seed(&self, rows: &[(&str, i64)]) -> Result<Vec<i64>, TestError> {
        let mut ids = Vec::with_capacity(rows.len());
        for (name, value) in rows {
            let result = sqlx::query("INSERT INTO Employees (Name, Value) VALUES (?, ?)")
                .bind(*name)
                .bind(*value)
                .execute(&self.pool)
                .await?;
            ids.push(result.last_insert_rowid());
        }
        Ok(ids)
    }

    /// Reads every row as `id -> (name, value)`
    pub async fn snapshot(&self) -> Result<BTreeMap<i64, (String, i64)>, TestError> {
        let rows: Vec<(i64, String, i64)> =
            sqlx::query_as("SELECT ROWID, Name, Value FROM Employees")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, value)| (id, (name, value)))
            .collect())
    }

    /// Makes every update of the named row fail inside the store
    ///
    /// Used to simulate a failure partway through a multi-statement
    /// transaction.
    pub async fn fail_updates_for(&self, name: &str) -> Result<(), TestError> {
        let escaped = name.replace('\'', "''");
        let trigger = format!(
            "CREATE TRIGGER fail_update BEFORE UPDATE ON Employees \
             WHEN OLD.Name = '{escaped}' \
             BEGIN SELECT RAISE(ABORT, 'simulated store failure'); END"
        );
        sqlx::query(&trigger).execute(&self.pool).await?;
        Ok(())
    }

    /// Removes the failure trigger installed by `fail_updates_for`
    pub async fn clear_failures(&self) -> Result<(), TestError> {
        sqlx::query("DROP TRIGGER IF EXISTS fail_update")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Clears all data from the database while preserving the schema
    pub async fn clear_data(&self) -> Result<(), TestError> {
        sqlx::query("DELETE FROM Employees")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_and_snapshot() {
        let db = TestDatabase::new().await.unwrap();
        let ids = db.seed(&[("Alice", 1), ("Bob", 2)]).await.unwrap();

        let snapshot = db.snapshot().await.unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[&ids[0]], ("Alice".to_string(), 1));
        assert_eq!(snapshot[&ids[1]], ("Bob".to_string(), 2));

        db.clear_data().await.unwrap();
        assert!(db.snapshot().await.unwrap().is_empty());
    }
}
