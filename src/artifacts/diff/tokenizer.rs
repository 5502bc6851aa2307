/// Splits text into lines on `\n`.
///
/// A single trailing newline terminates the last line rather than opening an
/// empty one, and empty text has no lines at all. Carriage returns are left
/// in place as part of the line content.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = text.split('\n').collect::<Vec<_>>();
    if lines.last() == Some(&"") {
        lines.pop();
    }

    lines
}

/// Whitespace-insensitive comparison key for a line.
pub fn normalize_whitespace(line: &str) -> &str {
    line.trim()
}
