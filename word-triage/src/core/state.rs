//! In-memory triage state: the three category lists for a run.

use crate::core::types::Classification;
use crate::core::word::eq_fold;

/// Words classified so far, one list per [`Classification`].
///
/// Lists hold words exactly as they were loaded or recorded. Membership is
/// case-insensitive; whitespace is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriageState {
    known: Vec<String>,
    unknown: Vec<String>,
    skip: Vec<String>,
}

impl TriageState {
    pub fn new(known: Vec<String>, unknown: Vec<String>, skip: Vec<String>) -> Self {
        Self {
            known,
            unknown,
            skip,
        }
    }

    /// Words recorded under `classification`, in current order.
    pub fn words(&self, classification: Classification) -> &[String] {
        match classification {
            Classification::Known => &self.known,
            Classification::Unknown => &self.unknown,
            Classification::Skip => &self.skip,
        }
    }

    /// The category already holding `word`, if any (case-insensitive).
    pub fn classification_of(&self, word: &str) -> Option<Classification> {
        Classification::ALL.into_iter().find(|classification| {
            self.words(*classification)
                .iter()
                .any(|existing| eq_fold(existing, word))
        })
    }

    /// Append `word` to the list for `classification`.
    ///
    /// No membership check is made here; callers consult
    /// [`Self::classification_of`] first.
    pub fn record(&mut self, classification: Classification, word: impl Into<String>) {
        self.words_mut(classification).push(word.into());
    }

    /// Sort the lists that are persisted in sorted order (known, skip).
    pub fn sort_for_save(&mut self) {
        for classification in Classification::ALL {
            if classification.sorted_on_save() {
                self.words_mut(classification).sort();
            }
        }
    }

    fn words_mut(&mut self, classification: Classification) -> &mut Vec<String> {
        match classification {
            Classification::Known => &mut self.known,
            Classification::Unknown => &mut self.unknown,
            Classification::Skip => &mut self.skip,
        }
    }
}
