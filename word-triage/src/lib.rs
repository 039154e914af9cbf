//! Interactive word triage.
//!
//! Reads a word list and asks the user, one key press per word, whether each
//! word is known, unknown, or should be skipped. Decisions accumulate in three
//! category files (`known.txt`, `unknown.txt`, `skip.txt`) so a word is never
//! asked about twice, across runs as well as within one.
//!
//! - **[`core`]**: Pure logic (word normalization, case-insensitive
//!   membership, the in-memory triage state). No I/O.
//! - **[`io`]**: Side-effecting operations (word list files, configuration,
//!   the terminal prompter).
//!
//! [`triage`] coordinates the two to implement the CLI run.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod triage;
