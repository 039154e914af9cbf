//! Word normalization and comparison.

/// Normalize one line of the input word list.
///
/// Surrounding whitespace is stripped; blank lines yield `None`.
pub fn normalize_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Case-insensitive equality using Unicode lowercase mapping.
pub fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
