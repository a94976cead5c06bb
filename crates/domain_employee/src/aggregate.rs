//! Grouped value totals for names starting with `A`, `B` or `C`

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::employee::Employee;

/// First letters included in the aggregate
pub const AGGREGATE_LETTERS: [char; 3] = ['A', 'B', 'C'];

/// Minimum summed value a letter group needs to be reported
pub const AGGREGATE_THRESHOLD: i64 = 11171;

/// Sum and count of employees sharing a first letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterAggregate {
    pub first_letter: String,
    pub total_value: i64,
    pub employee_count: i64,
}

impl LetterAggregate {
    /// Whether the group clears the reporting threshold
    ///
    /// The threshold applies to the group total, never to individual rows.
    pub fn meets_threshold(&self) -> bool {
        self.total_value >= AGGREGATE_THRESHOLD
    }

    /// Computes the aggregate over an in-memory slice
    ///
    /// Mirrors the store query: case-sensitive first letter, groups below the
    /// threshold dropped, ascending by letter.
    pub fn summarize(employees: &[Employee]) -> Vec<LetterAggregate> {
        let mut groups: BTreeMap<char, (i64, i64)> = BTreeMap::new();

        for employee in employees {
            let Some(letter) = employee.name.chars().next() else {
                continue;
            };
            if !AGGREGATE_LETTERS.contains(&letter) {
                continue;
            }
            let entry = groups.entry(letter).or_insert((0, 0));
            entry.0 += employee.value;
            entry.1 += 1;
        }

        groups
            .into_iter()
            .map(|(letter, (total_value, employee_count))| LetterAggregate {
                first_letter: letter.to_string(),
                total_value,
                employee_count,
            })
            .filter(LetterAggregate::meets_threshold)
            .collect()
    }
}
