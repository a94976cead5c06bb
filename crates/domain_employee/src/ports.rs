//! Employee Port Trait
//!
//! The `EmployeePort` trait is everything the HTTP layer needs from storage.
//! Implementations own connection handling: each call acquires whatever it
//! needs and releases it before returning, so no state is shared between
//! calls.
//!
//! ```rust,ignore
//! let port: Arc<dyn EmployeePort> = Arc::new(SqliteEmployeeAdapter::new(pool));
//! let created = port.create(EmployeeDraft::new("Alice", 5000)).await?;
//! let fetched = port.get(created.id).await?;
//! ```

use async_trait::async_trait;

use crate::aggregate::LetterAggregate;
use crate::classification::IncrementSummary;
use crate::employee::{Employee, EmployeeDraft, EmployeeId};
use crate::error::EmployeeError;

/// Storage operations over the employee collection
#[async_trait]
pub trait EmployeePort: Send + Sync {
    /// Returns every employee in store-defined order
    ///
    /// An empty table yields an empty vector, not an error.
    async fn list(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// Retrieves one employee
    ///
    /// # Returns
    ///
    /// The employee if found, or `EmployeeError::NotFound`
    async fn get(&self, id: EmployeeId) -> Result<Employee, EmployeeError>;

    /// Inserts a new employee and returns it with the assigned identifier
    ///
    /// The draft is validated before any store access.
    async fn create(&self, draft: EmployeeDraft) -> Result<Employee, EmployeeError>;

    /// Replaces name and value of an existing employee
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier of the employee to update
    /// * `draft` - New name and value
    async fn update(&self, id: EmployeeId, draft: EmployeeDraft) -> Result<Employee, EmployeeError>;

    /// Hard-deletes an employee
    async fn delete(&self, id: EmployeeId) -> Result<(), EmployeeError>;

    /// Applies the per-class increments to every employee atomically
    async fn increment_values(&self) -> Result<IncrementSummary, EmployeeError>;

    /// Per-letter totals for names starting with `A`, `B` or `C` that reach
    /// the aggregate threshold, ascending by letter
    async fn aggregate_abc_values(&self) -> Result<Vec<LetterAggregate>, EmployeeError>;

    /// Number of stored employees
    async fn count(&self) -> Result<i64, EmployeeError>;
}
