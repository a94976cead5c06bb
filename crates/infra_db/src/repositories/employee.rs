//! Employee repository implementation
//!
//! This module owns every SQL statement issued against the `Employees`
//! table. Each method checks a connection out of the pool for its own use and
//! returns it when the guard drops, whichever way the method exits.

use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, info, warn};

use domain_employee::{IncrementSummary, NameClass, AGGREGATE_LETTERS};

use crate::error::DatabaseError;

/// Repository for employee records
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    /// Creates a new EmployeeRepository with the given connection pool
    ///
    /// # Arguments
    ///
    /// * `pool` - The SQLite connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Retrieves all employees in store order
    ///
    /// No `ORDER BY` is applied; callers must not rely on the ordering.
    pub async fn list(&self) -> Result<Vec<EmployeeRow>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT ROWID AS id, Name AS name, Value AS value
            FROM Employees
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        debug!(count = rows.len(), "Listed employees");
        Ok(rows)
    }

    /// Retrieves an employee by row identifier
    ///
    /// # Returns
    ///
    /// The employee row, or `DatabaseError::NotFound`
    pub async fn get(&self, id: i64) -> Result<EmployeeRow, DatabaseError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT ROWID AS id, Name AS name, Value AS value
            FROM Employees
            WHERE ROWID = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Employee", id))
    }

    /// Inserts a new employee
    ///
    /// # Returns
    ///
    /// The row identifier assigned by the store
    pub async fn insert(&self, name: &str, value: i64) -> Result<i64, DatabaseError> {
        let mut conn = self.pool.acquire().await?;

        // last_insert_rowid is per connection; read it from the same checkout
        // as the insert, with nothing in between.
        let result = sqlx::query("INSERT INTO Employees (Name, Value) VALUES (?, ?)")
            .bind(name)
            .bind(value)
            .execute(&mut *conn)
            .await?;
        let id = result.last_insert_rowid();

        info!(employee_id = id, "Inserted employee");
        Ok(id)
    }

    /// Replaces name and value of an existing employee
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no row has the identifier
    pub async fn update(&self, id: i64, name: &str, value: i64) -> Result<(), DatabaseError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("UPDATE Employees SET Name = ?, Value = ? WHERE ROWID = ?")
            .bind(name)
            .bind(value)
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Employee", id));
        }

        info!(employee_id = id, "Updated employee");
        Ok(())
    }

    /// Deletes an employee
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no row has the identifier
    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM Employees WHERE ROWID = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Employee", id));
        }

        info!(employee_id = id, "Deleted employee");
        Ok(())
    }

    /// Counts stored employees
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let mut conn = self.pool.acquire().await?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Employees")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }

    /// Applies the per-class value increments in a single transaction
    ///
    /// The three updates touch disjoint row sets. Either all of them commit
    /// or the transaction is rolled back and no value changes.
    ///
    /// # Returns
    ///
    /// Rows updated per class
    pub async fn increment_values(&self) -> Result<IncrementSummary, DatabaseError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        match Self::apply_increments(&mut tx).await {
            Ok(summary) => {
                tx.commit()
                    .await
                    .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

                info!(
                    starting_with_e = summary.names_starting_with_e,
                    starting_with_g = summary.names_starting_with_g,
                    others = summary.others,
                    total = summary.total(),
                    "Incremented employee values"
                );
                Ok(summary)
            }
            Err(e) => {
                warn!(error = %e, "Increment failed, rolling back");
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(error = %rollback_err, "Rollback failed");
                }
                Err(e)
            }
        }
    }

    async fn apply_increments(
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<IncrementSummary, DatabaseError> {
        let mut summary = IncrementSummary::default();

        for class in NameClass::ALL {
            let filter = Self::class_filter(class);
            let prefixes = Self::class_prefixes(class);
            let increment = class.increment();

            // SQLite turns an overflowing integer sum into REAL; refuse instead.
            let check_sql =
                format!("SELECT COUNT(*) FROM Employees WHERE {filter} AND Value > ?");
            let mut check = sqlx::query_scalar::<_, i64>(&check_sql);
            for prefix in &prefixes {
                check = check.bind(prefix.as_str());
            }
            let overflowing = check.bind(i64::MAX - increment).fetch_one(&mut **tx).await?;
            if overflowing > 0 {
                return Err(DatabaseError::ConstraintViolation(format!(
                    "adding {increment} would overflow Value for {overflowing} employee(s)"
                )));
            }

            let update_sql = format!("UPDATE Employees SET Value = Value + ? WHERE {filter}");
            let mut update = sqlx::query(&update_sql).bind(increment);
            for prefix in &prefixes {
                update = update.bind(prefix.as_str());
            }

            let result = update.execute(&mut **tx).await?;
            debug!(?class, rows = result.rows_affected(), "Applied increment");
            summary.record(class, result.rows_affected());
        }

        Ok(summary)
    }

    /// Row predicate selecting one increment class
    ///
    /// substr + `=` compares under BINARY collation, so the prefixes are
    /// case-sensitive. LIKE would not be.
    fn class_filter(class: NameClass) -> &'static str {
        match class.prefix() {
            Some(_) => "substr(Name, 1, 1) = ?",
            None => "substr(Name, 1, 1) NOT IN (?, ?)",
        }
    }

    /// Values bound to the placeholders of `class_filter`, in order
    fn class_prefixes(class: NameClass) -> Vec<String> {
        match class.prefix() {
            Some(prefix) => vec![prefix.to_string()],
            None => NameClass::explicit_prefixes()
                .iter()
                .map(char::to_string)
                .collect(),
        }
    }

    /// Sums values per first letter for names starting with `A`, `B` or `C`
    ///
    /// # Arguments
    ///
    /// * `threshold` - Minimum group total; applied after grouping
    ///
    /// # Returns
    ///
    /// Qualifying groups ordered by letter
    pub async fn aggregate_by_first_letter(
        &self,
        threshold: i64,
    ) -> Result<Vec<LetterAggregateRow>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let [a, b, c] = AGGREGATE_LETTERS;

        let rows = sqlx::query_as::<_, LetterAggregateRow>(
            r#"
            SELECT
                substr(Name, 1, 1) AS first_letter,
                SUM(Value) AS total_value,
                COUNT(*) AS employee_count
            FROM Employees
            WHERE substr(Name, 1, 1) IN (?, ?, ?)
            GROUP BY substr(Name, 1, 1)
            HAVING SUM(Value) >= ?
            ORDER BY first_letter
            "#,
        )
        .bind(a.to_string())
        .bind(b.to_string())
        .bind(c.to_string())
        .bind(threshold)
        .fetch_all(&mut *conn)
        .await?;

        debug!(groups = rows.len(), threshold, "Aggregated employee values");
        Ok(rows)
    }
}

/// Database row for an employee
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmployeeRow {
    pub id: i64,
    pub name: String,
    pub value: i64,
}

/// Database row for one letter group of the aggregate
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LetterAggregateRow {
    pub first_letter: String,
    pub total_value: i64,
    pub employee_count: i64,
}
