//! Document-number sequencing.
//!
//! Each document type carries a human-readable number: a fixed prefix plus a
//! numeric suffix zero-padded to three digits (`DP001`, `JOB042`). The next
//! number is derived from the most recently issued one; this module holds the
//! pure derivation, the store supplies the "last issued" read.

use serde::{Deserialize, Serialize};

/// Transactional document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Production,
    Sale,
}

impl DocKind {
    /// Fixed textual prefix for this document type's numbers.
    pub fn prefix(self) -> &'static str {
        match self {
            DocKind::Production => "DP",
            DocKind::Sale => "JOB",
        }
    }

    /// First number issued for this document type.
    pub fn seed(self) -> String {
        format!("{}001", self.prefix())
    }

    /// Derive the number that follows `last`.
    ///
    /// Strips the prefix, parses the remainder as an integer and re-formats
    /// incremented with three-digit padding (wider values simply grow). If
    /// there is no prior number, or it does not parse after prefix removal,
    /// falls back to the seed. Advisory only: nothing is reserved, so two
    /// concurrent callers can be handed the same next number.
    pub fn next_after(self, last: Option<&str>) -> String {
        let Some(last) = last else {
            return self.seed();
        };
        let Some(rest) = last.strip_prefix(self.prefix()) else {
            return self.seed();
        };
        match rest.trim().parse::<u64>() {
            Ok(n) => format!("{}{:03}", self.prefix(), n + 1),
            Err(_) => self.seed(),
        }
    }
}

impl core::fmt::Display for DocKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DocKind::Production => f.write_str("production"),
            DocKind::Sale => f.write_str("sale"),
        }
    }
}
