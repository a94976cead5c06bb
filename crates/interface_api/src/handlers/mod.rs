//! Request handlers

pub mod employees;
pub mod health;
