//! Repository implementations
//!
//! Repositories encapsulate SQL queries and map between database rows and
//! plain row structs. Each method:
//! - Checks out its own pooled connection and releases it on return
//! - Binds every caller-supplied value as a parameter
//! - Wraps multi-statement mutations in a transaction

pub mod employee;

pub use employee::{EmployeeRepository, EmployeeRow, LetterAggregateRow};
