use crate::lines::split_lines;
use crate::EditError;

/// Returned by [`add_line_numbers`] for an empty buffer.
pub const NO_CONTENT: &str = "no content available";

fn numbered(lineno: usize, line: &str) -> String {
    format!("{lineno:>3} | {line}")
}

/// Prefix every line with its 1-based number, right-aligned to width 3.
///
/// ```
/// assert_eq!(lnedit_core::add_line_numbers("a\nb"), "  1 | a\n  2 | b");
/// ```
pub fn add_line_numbers(content: &str) -> String {
    if content.is_empty() {
        return NO_CONTENT.to_string();
    }
    split_lines(content)
        .iter()
        .enumerate()
        .map(|(i, line)| numbered(i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered view of the inclusive 1-based range `start..=end`.
///
/// Numbers stay absolute, so the output lines up with a full
/// [`add_line_numbers`] view of the same buffer.
pub fn add_line_numbers_range(content: &str, start: usize, end: usize) -> Result<String, EditError> {
    let lines = split_lines(content);
    if start == 0 || end < start || end > lines.len() {
        return Err(EditError::InvalidViewRange {
            start,
            end,
            total: lines.len(),
        });
    }
    Ok(lines[start - 1..end]
        .iter()
        .enumerate()
        .map(|(i, line)| numbered(start + i, line))
        .collect::<Vec<_>>()
        .join("\n"))
}
