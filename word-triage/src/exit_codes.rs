//! Stable exit codes for the `word-triage` binary.

/// Run completed, or usage was printed.
pub const OK: i32 = 0;
/// A load, save, or configuration error occurred, or the user quit the prompt.
pub const FAILURE: i32 = 1;
