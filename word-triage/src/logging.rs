//! Development-time tracing for debugging triage runs.
//!
//! Tracing is diagnostics only: output goes to stderr and is never part of the
//! category files or the summary line printed on success. Fatal errors are
//! reported by `main` regardless of the filter.
//!
//! While a word is on screen the terminal is in raw mode on the alternate
//! screen, so debug output is best redirected to a file.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format, colored only when stderr is a terminal.
///
/// # Example
/// ```bash
/// RUST_LOG=word_triage=debug word-triage words.txt 2>triage.log
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let ansi = std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .compact(),
        )
        .init();
}
