//! Employee Domain
//!
//! This crate holds the domain model for the employee records service: the
//! `Employee` entity, the payload used to create or update one, and the two
//! derived batch concepts built on top of the name field.
//!
//! # Key Concepts
//!
//! - **Employee**: A named record with an integer value, identified by the
//!   row identifier the store assigns on insert
//! - **Name Class**: The prefix classification (`E`, `G`, everything else)
//!   that drives the bulk increment
//! - **Letter Aggregate**: Per-first-letter sum and count over names starting
//!   with `A`, `B` or `C`, kept only above a fixed threshold
//!
//! # Ports
//!
//! Storage is reached exclusively through the [`EmployeePort`] trait so the
//! HTTP layer never sees SQL or connection handling.

pub mod employee;
pub mod classification;
pub mod aggregate;
pub mod error;
pub mod ports;

pub use employee::{Employee, EmployeeDraft, EmployeeId};
pub use classification::{IncrementSummary, NameClass};
pub use aggregate::{LetterAggregate, AGGREGATE_LETTERS, AGGREGATE_THRESHOLD};
pub use error::EmployeeError;
pub use ports::EmployeePort;
