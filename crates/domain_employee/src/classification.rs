//! Name-prefix classification for the bulk increment
//!
//! Every employee falls into exactly one class. The classes are evaluated in
//! precedence order and `Other` is defined as the complement of the first
//! two, not by a prefix test of its own. Comparison is case-sensitive: `e`
//! and `g` land in `Other`.

use serde::{Deserialize, Serialize};

/// Bulk-increment class of an employee name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameClass {
    /// Name starts with `E`
    StartsWithE,
    /// Name starts with `G`
    StartsWithG,
    /// Anything else, including names starting with lowercase letters
    Other,
}

impl NameClass {
    /// All classes in the order their updates are applied
    pub const ALL: [NameClass; 3] = [
        NameClass::StartsWithE,
        NameClass::StartsWithG,
        NameClass::Other,
    ];

    /// Classifies a name by its first character
    pub fn classify(name: &str) -> Self {
        match name.chars().next() {
            Some('E') => NameClass::StartsWithE,
            Some('G') => NameClass::StartsWithG,
            _ => NameClass::Other,
        }
    }

    /// The prefix character selecting this class, `None` for the complement
    pub fn prefix(self) -> Option<char> {
        match self {
            NameClass::StartsWithE => Some('E'),
            NameClass::StartsWithG => Some('G'),
            NameClass::Other => None,
        }
    }

    /// Prefixes owned by the explicit classes; `Other` excludes all of them
    pub fn explicit_prefixes() -> [char; 2] {
        ['E', 'G']
    }

    /// Amount added to `value` for members of this class
    pub fn increment(self) -> i64 {
        match self {
            NameClass::StartsWithE => 1,
            NameClass::StartsWithG => 10,
            NameClass::Other => 100,
        }
    }
}

/// Rows touched by one bulk increment, per class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncrementSummary {
    pub names_starting_with_e: u64,
    pub names_starting_with_g: u64,
    pub others: u64,
}

impl IncrementSummary {
    /// Records the number of rows updated for a class
    pub fn record(&mut self, class: NameClass, rows: u64) {
        match class {
            NameClass::StartsWithE => self.names_starting_with_e = rows,
            NameClass::StartsWithG => self.names_starting_with_g = rows,
            NameClass::Other => self.others = rows,
        }
    }

    /// Number of rows updated for a class
    pub fn count(&self, class: NameClass) -> u64 {
        match class {
            NameClass::StartsWithE => self.names_starting_with_e,
            NameClass::StartsWithG => self.names_starting_with_g,
            NameClass::Other => self.others,
        }
    }

    /// Sum across all classes; equals the table's row count
    pub fn total(&self) -> u64 {
        self.names_starting_with_e + self.names_starting_with_g + self.others
    }
}
