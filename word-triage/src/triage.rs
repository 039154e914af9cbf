//! Orchestration for a triage run.
//!
//! A run loads the category files, asks about every input word that is not
//! classified yet, and writes the category files back. If the prompter
//! terminates, progress made so far is still saved before the error is
//! returned.

use std::fmt;
use std::path::Path;

use anyhow::{Error, Result};
use tracing::{debug, info, warn};

use crate::core::state::TriageState;
use crate::core::types::Classification;
use crate::io::prompter::{Prompter, Termination};
use crate::io::store::{CategoryPaths, load_state, save_state};
use crate::io::word_list::read_input_words;

/// Result of triaging a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Triaged {
    /// The word was already in a category; nobody was asked.
    AlreadyClassified(Classification),
    /// The prompter classified the word and it was recorded.
    Classified(Classification),
}

/// Classifies words, asking the prompter only about unseen ones.
pub struct Triager<P> {
    state: TriageState,
    prompter: P,
}

impl<P: Prompter> Triager<P> {
    pub fn new(state: TriageState, prompter: P) -> Self {
        Self { state, prompter }
    }

    /// Classify `word`.
    ///
    /// Words already present in any category (case-insensitive) are a no-op.
    /// On termination the state is left untouched for this word.
    pub fn classify(&mut self, word: &str) -> Result<Triaged, Termination> {
        if let Some(existing) = self.state.classification_of(word) {
            debug!(word, %existing, "already classified");
            return Ok(Triaged::AlreadyClassified(existing));
        }
        let classification = self.prompter.ask(word)?;
        debug!(word, %classification, "classified");
        self.state.record(classification, word);
        Ok(Triaged::Classified(classification))
    }

    pub fn state(&self) -> &TriageState {
        &self.state
    }

    /// Release the prompter and hand back the accumulated state.
    pub fn into_state(self) -> TriageState {
        self.state
    }
}

/// Counts for a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriageSummary {
    /// Non-blank words in the input list.
    pub read: usize,
    /// Words the prompter was asked about.
    pub prompted: usize,
    /// Words skipped because they were already classified.
    pub already_classified: usize,
    pub known: usize,
    pub unknown: usize,
    pub skip: usize,
}

impl TriageSummary {
    fn record_totals(&mut self, state: &TriageState) {
        self.known = state.words(Classification::Known).len();
        self.unknown = state.words(Classification::Unknown).len();
        self.skip = state.words(Classification::Skip).len();
    }
}

impl fmt::Display for TriageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "triage: read={} prompted={} already={} known={} unknown={} skip={}",
            self.read, self.prompted, self.already_classified, self.known, self.unknown, self.skip
        )
    }
}

/// Triage every word in `input` against the category files in `paths`.
///
/// All three category files must exist. On prompter termination the
/// remaining words are not processed, the state is saved on a best-effort
/// basis, and the termination is returned as the error.
pub fn run_triage<P: Prompter>(
    input: &Path,
    paths: &CategoryPaths,
    prompter: P,
) -> Result<TriageSummary> {
    let state = load_state(paths)?;
    let words = read_input_words(input)?;
    info!(input = %input.display(), words = words.len(), "starting triage");

    let mut summary = TriageSummary {
        read: words.len(),
        ..TriageSummary::default()
    };
    let mut triager = Triager::new(state, prompter);
    for word in &words {
        match triager.classify(word) {
            Ok(Triaged::Classified(_)) => summary.prompted += 1,
            Ok(Triaged::AlreadyClassified(_)) => summary.already_classified += 1,
            Err(termination) => {
                // Dropping the prompter restores the terminal before any
                // warning is logged.
                let mut state = triager.into_state();
                return Err(save_after_termination(paths, &mut state, termination));
            }
        }
    }

    let mut state = triager.into_state();
    save_state(paths, &mut state)?;
    summary.record_totals(&state);
    info!(
        prompted = summary.prompted,
        already = summary.already_classified,
        "triage complete"
    );
    Ok(summary)
}

fn save_after_termination(
    paths: &CategoryPaths,
    state: &mut TriageState,
    termination: Termination,
) -> Error {
    let err = Error::new(termination);
    match save_state(paths, state) {
        Ok(()) => {
            info!("progress saved after termination");
            err.context("triage aborted (progress saved)")
        }
        Err(save_err) => {
            warn!(error = %format!("{save_err:#}"), "saving progress after termination failed");
            err.context(format!("triage aborted; saving progress failed: {save_err:#}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptStep, ScriptedPrompter};

    fn state_with_known(words: &[&str]) -> TriageState {
        TriageState::new(
            words.iter().map(|word| word.to_string()).collect(),
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn classify_records_answer() {
        let mut prompter = ScriptedPrompter::new(vec![ScriptStep::Answer(Classification::Skip)]);
        let mut triager = Triager::new(TriageState::default(), &mut prompter);

        let triaged = triager.classify("heron").expect("classify");
        assert_eq!(triaged, Triaged::Classified(Classification::Skip));
        assert_eq!(triager.state().words(Classification::Skip), ["heron"]);
        drop(triager);
        assert_eq!(prompter.asked(), ["heron"]);
    }

    #[test]
    fn classify_known_word_is_noop_without_prompt() {
        let mut prompter = ScriptedPrompter::new(Vec::new());
        let mut triager = Triager::new(state_with_known(&["Apple"]), &mut prompter);

        for word in ["apple", "APPLE", "Apple"] {
            let triaged = triager.classify(word).expect("classify");
            assert_eq!(triaged, Triaged::AlreadyClassified(Classification::Known));
        }
        assert_eq!(triager.state().words(Classification::Known), ["Apple"]);
        drop(triager);
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn classify_same_word_twice_prompts_once() {
        let mut prompter = ScriptedPrompter::new(vec![
            ScriptStep::Answer(Classification::Unknown),
            ScriptStep::Answer(Classification::Known),
        ]);
        let mut triager = Triager::new(TriageState::default(), &mut prompter);

        triager.classify("otter").expect("first");
        let second = triager.classify("Otter").expect("second");
        assert_eq!(second, Triaged::AlreadyClassified(Classification::Unknown));
        assert_eq!(triager.state().words(Classification::Unknown), ["otter"]);
        assert!(triager.state().words(Classification::Known).is_empty());
        drop(triager);
        assert_eq!(prompter.asked(), ["otter"]);
    }

    #[test]
    fn termination_leaves_state_untouched() {
        let mut prompter = ScriptedPrompter::new(vec![ScriptStep::Quit]);
        let mut triager = Triager::new(TriageState::default(), &mut prompter);

        let err = triager.classify("lynx").unwrap_err();
        assert!(matches!(err, Termination::Quit));
        assert_eq!(triager.into_state(), TriageState::default());
    }

    #[test]
    fn failed_save_after_termination_keeps_termination_as_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = CategoryPaths::new(&temp.path().join("missing-dir"));
        let mut state = state_with_known(&["cat"]);

        let err = save_after_termination(&paths, &mut state, Termination::Quit);

        assert!(matches!(
            err.downcast_ref::<Termination>(),
            Some(Termination::Quit)
        ));
        let message = format!("{err:#}");
        assert!(message.contains("saving progress failed"), "{message}");
        assert!(message.contains("known.txt"), "{message}");
    }

    #[test]
    fn summary_display_is_single_line() {
        let summary = TriageSummary {
            read: 5,
            prompted: 2,
            already_classified: 3,
            known: 4,
            unknown: 1,
            skip: 0,
        };
        assert_eq!(
            summary.to_string(),
            "triage: read=5 prompted=2 already=3 known=4 unknown=1 skip=0"
        );
    }
}
