//! Infrastructure Database Layer
//!
//! This crate provides the record store access for the employee service,
//! backed by SQLite through SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern:
//!
//! - [`repositories::EmployeeRepository`] owns the SQL and row mapping
//! - [`adapters::SqliteEmployeeAdapter`] implements the domain's
//!   `EmployeePort`, validating drafts before any store access and
//!   translating `DatabaseError` into the domain's error kinds
//!
//! # Connection Scoping
//!
//! Every repository call acquires its own connection from the pool and holds
//! it only for the duration of that call. Pool guards and transactions return
//! the connection on drop, so release happens on every exit path.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, schema::ensure_schema};
//! use infra_db::adapters::SqliteEmployeeAdapter;
//!
//! let pool = create_pool(DatabaseConfig::new("sqlite://SqliteDB.db")).await?;
//! ensure_schema(&pool).await?;
//! let adapter = SqliteEmployeeAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod schema;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, DatabaseConfig};
pub use error::DatabaseError;
pub use adapters::SqliteEmployeeAdapter;
pub use repositories::EmployeeRepository;
