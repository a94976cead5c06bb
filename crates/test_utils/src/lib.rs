//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! employee records test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built employee rosters
//! - `database`: Throwaway SQLite databases with the schema in place
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod database;
pub mod generators;

pub use fixtures::*;
pub use database::*;
pub use generators::*;
