//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating employee data that keeps
//! the domain invariants (non-blank names).

use domain_employee::EmployeeDraft;
use proptest::prelude::*;

/// Strategy for names that are never blank, with first letters biased
/// towards the ones the bulk increment and aggregate care about
pub fn name_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just('A'),
            Just('B'),
            Just('C'),
            Just('E'),
            Just('G'),
            Just('e'),
            Just('g'),
            Just('Z'),
        ],
        "[a-z]{0,8}",
    )
        .prop_map(|(first, rest)| format!("{first}{rest}"))
}

/// Strategy for employee values
pub fn value_strategy() -> impl Strategy<Value = i64> {
    -10_000i64..20_000i64
}

/// Strategy for valid drafts
pub fn draft_strategy() -> impl Strategy<Value = EmployeeDraft> {
    (name_strategy(), value_strategy()).prop_map(|(name, value)| EmployeeDraft::new(name, value))
}

/// Strategy for a roster of up to `max` drafts
pub fn roster_strategy(max: usize) -> impl Strategy<Value = Vec<EmployeeDraft>> {
    prop::collection::vec(draft_strategy(), 0..=max)
}

/// Strategy for whitespace-only strings, including the empty string
pub fn blank_name_strategy() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,6}"
}
