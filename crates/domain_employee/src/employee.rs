//! Employee entity and its create/update payload

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::classification::NameClass;
use crate::error::EmployeeError;

/// Store-assigned row identifier of an employee
pub type EmployeeId = i64;

/// Message reported whenever a draft is rejected for its name
pub const EMPTY_NAME_MESSAGE: &str = "Employee name cannot be empty";

/// An employee record as persisted in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Row identifier, assigned by the store on insert and never changed
    pub id: EmployeeId,
    /// Display name, never blank
    pub name: String,
    /// Integer value targeted by the bulk increment
    pub value: i64,
}

impl Employee {
    /// Creates an employee from its stored parts
    pub fn new(id: EmployeeId, name: impl Into<String>, value: i64) -> Self {
        Self {
            id,
            name: name.into(),
            value,
        }
    }

    /// Returns the bulk-increment class this employee falls into
    pub fn class(&self) -> NameClass {
        NameClass::classify(&self.name)
    }
}

/// The client-supplied part of an employee, used by create and update
///
/// Drafts carry no identifier: on create the store assigns one, on update the
/// identifier comes from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EmployeeDraft {
    /// Requested name
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    /// Requested value
    pub value: i64,
}

impl EmployeeDraft {
    /// Creates a new draft
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Checks the draft before it is allowed anywhere near the store
    ///
    /// # Errors
    ///
    /// Returns `EmployeeError::Validation` when the name is empty or
    /// whitespace only.
    pub fn check(&self) -> Result<(), EmployeeError> {
        self.validate()
            .map_err(|_| EmployeeError::Validation(EMPTY_NAME_MESSAGE.to_string()))
    }

    /// Attaches an identifier, producing the full record
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            value: self.value,
        }
    }
}

fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank_name"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_with_name_passes() {
        assert!(EmployeeDraft::new("Alice", 5).check().is_ok());
    }

    #[test]
    fn test_draft_with_padded_name_passes() {
        assert!(EmployeeDraft::new("  Bob ", 0).check().is_ok());
    }

    #[test]
    fn test_blank_names_rejected() {
        for name in ["", " ", "\t", "\n  \r"] {
            let err = EmployeeDraft::new(name, 1).check().unwrap_err();
            assert!(err.is_validation(), "{name:?} should be rejected");
            assert_eq!(err.to_string(), format!("Validation error: {EMPTY_NAME_MESSAGE}"));
        }
    }

    #[test]
    fn test_into_employee_keeps_fields() {
        let employee = EmployeeDraft::new("Gina", 42).into_employee(7);
        assert_eq!(employee, Employee::new(7, "Gina", 42));
    }
}
