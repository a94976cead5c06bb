//! Pre-built Test Fixtures
//!
//! Rosters are `(name, value)` pairs ready to seed into a test database.

use domain_employee::EmployeeDraft;

/// Fixture for employee rosters
pub struct EmployeeFixtures;

impl EmployeeFixtures {
    /// A roster with members of every increment class, including lowercase
    /// names that must not be treated as `E` or `G`
    pub fn mixed_roster() -> Vec<(&'static str, i64)> {
        vec![
            ("Emma", 10),
            ("Eli", 0),
            ("Gordon", 20),
            ("Grace", -5),
            ("Alice", 5000),
            ("Bob", 3000),
            ("emily", 7),
            ("gary", 8),
            ("Zoe", 1),
        ]
    }

    /// The documented aggregate example: `A` totals 12000, `B` 3000
    pub fn aggregate_example() -> Vec<(&'static str, i64)> {
        vec![("Alice", 5000), ("Adam", 7000), ("Bob", 3000)]
    }

    /// A roster where every `A`/`B`/`C` group stays under the threshold
    pub fn below_threshold_roster() -> Vec<(&'static str, i64)> {
        vec![("Alice", 100), ("Bob", 11170), ("Cara", 0), ("Dave", 50000)]
    }

    /// A valid draft
    pub fn draft() -> EmployeeDraft {
        EmployeeDraft::new("Alice", 5000)
    }

    /// Drafts whose names must be rejected
    pub fn blank_drafts() -> Vec<EmployeeDraft> {
        ["", " ", "\t\n"]
            .into_iter()
            .map(|name| EmployeeDraft::new(name, 1))
            .collect()
    }
}
