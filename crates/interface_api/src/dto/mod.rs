//! Request and response bodies
//!
//! Field names are camelCase to match the browser client.

pub mod employee;
