//! Line-oriented word list files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::word::normalize_line;

/// Load a newline-delimited word list.
///
/// Lines are returned verbatim (no trimming, no case folding). Trailing empty
/// lines are dropped so a final newline does not produce an empty word. A
/// missing file is an error.
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let words = split_lines(&contents);
    debug!(path = %path.display(), count = words.len(), "word list loaded");
    Ok(words)
}

/// Load the list of words to triage: whitespace trimmed, blank lines dropped.
pub fn read_input_words(path: &Path) -> Result<Vec<String>> {
    let words = load_words(path)?
        .iter()
        .filter_map(|line| normalize_line(line))
        .map(str::to_string)
        .collect();
    Ok(words)
}

/// Overwrite `path` with one word per line, each terminated by `\n`.
pub fn save_words(path: &Path, words: &[String]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for word in words {
        writer
            .write_all(word.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .with_context(|| format!("write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    debug!(path = %path.display(), count = words.len(), "word list saved");
    Ok(())
}

fn split_lines(contents: &str) -> Vec<String> {
    let mut lines: Vec<String> = contents.split('\n').map(str::to_string).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
