//! I/O helpers for triage runs.

pub mod config;
pub mod prompter;
pub mod store;
pub mod word_list;
