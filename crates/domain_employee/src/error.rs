//! Employee domain errors

use thiserror::Error;

use crate::employee::EmployeeId;

/// Errors surfaced by every employee operation
///
/// Each operation yields either a success payload or exactly one of these.
#[derive(Debug, Error)]
pub enum EmployeeError {
    /// The submitted draft was rejected before any store access
    #[error("Validation error: {0}")]
    Validation(String),

    /// No employee exists with the requested identifier
    #[error("Employee with ID {0} not found")]
    NotFound(EmployeeId),

    /// Connection, statement, or transaction failure in the store
    #[error("Store access failed: {0}")]
    StoreAccess(String),
}

impl EmployeeError {
    /// Checks if this error is a rejected draft
    pub fn is_validation(&self) -> bool {
        matches!(self, EmployeeError::Validation(_))
    }

    /// Checks if this error indicates a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(self, EmployeeError::NotFound(_))
    }

    /// Checks if this error came from the store itself
    pub fn is_store_access(&self) -> bool {
        matches!(self, EmployeeError::StoreAccess(_))
    }
}
