//! Deterministic, pure logic for word triage.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod state;
pub mod types;
pub mod word;
