//! Domain Adapters
//!
//! This module provides adapter implementations for domain ports,
//! connecting domain interfaces to the SQLite database layer.
//!
//! # Architecture
//!
//! Each adapter:
//! - Implements the domain's port trait
//! - Translates between domain models and database row types
//! - Uses the repository layer for database operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::SqliteEmployeeAdapter;
//! use domain_employee::EmployeePort;
//!
//! let adapter = SqliteEmployeeAdapter::new(pool);
//! let employee = adapter.get(employee_id).await?;
//! ```

pub mod employee;

pub use employee::SqliteEmployeeAdapter;
