//! SQLite Employee Adapter
//!
//! This module provides the internal (database) adapter for the employee
//! domain, implementing the `EmployeePort` trait on top of the
//! `EmployeeRepository`.
//!
//! The adapter is the operation boundary:
//!
//! - Drafts are validated before any connection is acquired
//! - Repository rows are converted into domain types
//! - `DatabaseError::NotFound` becomes `EmployeeError::NotFound` carrying the
//!   requested identifier; every other database failure becomes
//!   `EmployeeError::StoreAccess` with the underlying message

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, instrument, warn};

use domain_employee::{
    Employee, EmployeeDraft, EmployeeError, EmployeeId, EmployeePort, IncrementSummary,
    LetterAggregate, AGGREGATE_THRESHOLD,
};

use crate::error::DatabaseError;
use crate::repositories::employee::{EmployeeRepository, EmployeeRow, LetterAggregateRow};

/// SQLite-backed implementation of the EmployeePort trait
#[derive(Debug, Clone)]
pub struct SqliteEmployeeAdapter {
    repository: EmployeeRepository,
}

impl SqliteEmployeeAdapter {
    /// Creates a new SQLite employee adapter
    ///
    /// # Arguments
    ///
    /// * `pool` - The SQLite connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: EmployeeRepository::new(pool),
        }
    }
}

#[async_trait]
impl EmployeePort for SqliteEmployeeAdapter {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Employee>, EmployeeError> {
        let rows = self.repository.list().await.map_err(store_error)?;
        Ok(rows.into_iter().map(row_to_employee).collect())
    }

    #[instrument(skip(self), fields(employee_id = id))]
    async fn get(&self, id: EmployeeId) -> Result<Employee, EmployeeError> {
        debug!("Fetching employee by ID");

        self.repository
            .get(id)
            .await
            .map(row_to_employee)
            .map_err(|e| lookup_error(e, id))
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: EmployeeDraft) -> Result<Employee, EmployeeError> {
        draft.check()?;

        let id = self
            .repository
            .insert(&draft.name, draft.value)
            .await
            .map_err(store_error)?;

        Ok(draft.into_employee(id))
    }

    #[instrument(skip(self, draft), fields(employee_id = id))]
    async fn update(&self, id: EmployeeId, draft: EmployeeDraft) -> Result<Employee, EmployeeError> {
        draft.check()?;

        self.repository
            .update(id, &draft.name, draft.value)
            .await
            .map_err(|e| lookup_error(e, id))?;

        Ok(draft.into_employee(id))
    }

    #[instrument(skip(self), fields(employee_id = id))]
    async fn delete(&self, id: EmployeeId) -> Result<(), EmployeeError> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| lookup_error(e, id))
    }

    #[instrument(skip(self))]
    async fn increment_values(&self) -> Result<IncrementSummary, EmployeeError> {
        self.repository.increment_values().await.map_err(store_error)
    }

    #[instrument(skip(self))]
    async fn aggregate_abc_values(&self) -> Result<Vec<LetterAggregate>, EmployeeError> {
        let rows = self
            .repository
            .aggregate_by_first_letter(AGGREGATE_THRESHOLD)
            .await
            .map_err(store_error)?;

        Ok(rows.into_iter().map(row_to_aggregate).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<i64, EmployeeError> {
        self.repository.count().await.map_err(store_error)
    }
}

/// Maps a failure of an id-addressed operation
fn lookup_error(e: DatabaseError, id: EmployeeId) -> EmployeeError {
    match e {
        DatabaseError::NotFound(_) => EmployeeError::NotFound(id),
        other => store_error(other),
    }
}

/// Maps any database failure to a store access error
fn store_error(e: DatabaseError) -> EmployeeError {
    warn!(error = %e, "Store access failed");
    EmployeeError::StoreAccess(e.to_string())
}

fn row_to_employee(row: EmployeeRow) -> Employee {
    Employee::new(row.id, row.name, row.value)
}

fn row_to_aggregate(row: LetterAggregateRow) -> LetterAggregate {
    LetterAggregate {
        first_letter: row.first_letter,
        total_value: row.total_value,
        employee_count: row.employee_count,
    }
}
