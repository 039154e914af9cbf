//! Shared types for triage decisions.

use std::fmt;

/// Category a word ends up in once the user has answered for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The user knows the word.
    Known,
    /// The user does not know the word.
    Unknown,
    /// Deferred; the word is recorded so it is not asked about again.
    Skip,
}

impl Classification {
    /// All classifications in persistence order.
    pub const ALL: [Classification; 3] = [
        Classification::Known,
        Classification::Unknown,
        Classification::Skip,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Known => "known",
            Classification::Unknown => "unknown",
            Classification::Skip => "skip",
        }
    }

    /// Whether the category file is written in sorted order.
    ///
    /// `Unknown` keeps encounter order so the most recent gaps stay at the end.
    pub fn sorted_on_save(self) -> bool {
        matches!(self, Classification::Known | Classification::Skip)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unknown_keeps_encounter_order() {
        let sorted: Vec<bool> = Classification::ALL
            .iter()
            .map(|c| c.sorted_on_save())
            .collect();
        assert_eq!(sorted, vec![true, false, true]);
    }
}
