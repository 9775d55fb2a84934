use serde::{Deserialize, Serialize};

use crate::lines::{join_lines, parse_line_number, split_lines, to_one_based};
use crate::EditError;

/// Outcome of a string-boundary edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResult {
    /// True iff the edit was valid and applied.
    pub success: bool,
    /// The edited buffer. Present only on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_text: Option<String>,
    /// Human-readable outcome, not meant for parsing.
    pub message: String,
}

impl UpdateResult {
    pub fn success(updated_text: String, message: impl Into<String>) -> Self {
        Self {
            success: true,
            updated_text: Some(updated_text),
            message: message.into(),
        }
    }

    pub fn failure(err: &EditError) -> Self {
        Self {
            success: false,
            updated_text: None,
            message: err.to_string(),
        }
    }
}

/// Replace line `line_number` (1-based) with `new_content`.
///
/// `new_content` is inserted as one line even if it contains `\n`; the line
/// count of the result then differs from a re-split of it.
pub fn replace_line(content: &str, line_number: usize, new_content: &str) -> Result<String, EditError> {
    if line_number < 1 || new_content.is_empty() {
        return Err(EditError::InvalidParameters);
    }
    let mut lines = split_lines(content);
    let total = lines.len();
    let slot = lines
        .get_mut(line_number - 1)
        .ok_or(EditError::LineOutOfRange {
            line: line_number,
            total,
        })?;
    *slot = new_content;
    Ok(join_lines(&lines))
}

/// Replace the inclusive 1-based block `start..=end` with the lines of
/// `new_content`.
///
/// An empty `new_content` is one empty line, not zero lines.
pub fn replace_block(
    content: &str,
    start: usize,
    end: usize,
    new_content: &str,
) -> Result<String, EditError> {
    if start < 1 || end < start {
        return Err(EditError::InvalidParameters);
    }
    let lines = split_lines(content);
    if end > lines.len() {
        return Err(EditError::BlockOutOfRange {
            start,
            end,
            total: lines.len(),
        });
    }

    let replacement = split_lines(new_content);
    let mut updated = Vec::with_capacity(lines.len() - (end - start + 1) + replacement.len());
    updated.extend_from_slice(&lines[..start - 1]);
    updated.extend_from_slice(&replacement);
    updated.extend_from_slice(&lines[end..]);
    Ok(join_lines(&updated))
}

/// Replace one line, with the line number given as a decimal string.
pub fn update_content_by_line_number(
    content: &str,
    line_number: &str,
    new_content: &str,
) -> UpdateResult {
    let res = parse_line_number(line_number).and_then(|n| {
        let n = to_one_based(n).ok_or(EditError::InvalidParameters)?;
        replace_line(content, n, new_content).map(|text| (n, text))
    });
    match res {
        Ok((n, text)) => {
            tracing::debug!(line = n, "line updated");
            UpdateResult::success(text, format!("updated line {n} to: {new_content}"))
        }
        Err(e) => {
            tracing::debug!(line_number, error = %e, "line update rejected");
            UpdateResult::failure(&e)
        }
    }
}

/// Replace a block of lines, with the bounds given as decimal strings.
pub fn update_content_by_block(
    content: &str,
    start_line: &str,
    end_line: &str,
    new_content: &str,
) -> UpdateResult {
    let res = parse_range(start_line, end_line).and_then(|(start, end)| {
        replace_block(content, start, end, new_content).map(|text| (start, end, text))
    });
    match res {
        Ok((start, end, text)) => {
            tracing::debug!(start, end, "block updated");
            UpdateResult::success(text, format!("updated lines {start}-{end}"))
        }
        Err(e) => {
            tracing::debug!(start_line, end_line, error = %e, "block update rejected");
            UpdateResult::failure(&e)
        }
    }
}

fn parse_range(start_line: &str, end_line: &str) -> Result<(usize, usize), EditError> {
    let (start, end) = match (parse_line_number(start_line), parse_line_number(end_line)) {
        (Ok(s), Ok(e)) => (s, e),
        _ => return Err(EditError::ParseRange),
    };
    if end < start {
        return Err(EditError::InvalidParameters);
    }
    let start = to_one_based(start).ok_or(EditError::InvalidParameters)?;
    let end = to_one_based(end).ok_or(EditError::InvalidParameters)?;
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_update_replaces_middle_line() {
        let res = update_content_by_line_number("a\nb\nc", "2", "B");
        assert!(res.success);
        assert_eq!(res.updated_text.as_deref(), Some("a\nB\nc"));
        assert!(res.message.contains('2'));
        assert!(res.message.contains('B'));
    }

    #[test]
    fn line_update_rejects_non_integer() {
        let res = update_content_by_line_number("a\nb", "abc", "x");
        assert!(!res.success);
        assert!(res.updated_text.is_none());
        assert!(res.message.starts_with("failed to parse line number"));
    }

    #[test]
    fn line_update_rejects_zero_and_empty_text() {
        for (line, text) in [("0", "x"), ("-2", "x"), ("1", "")] {
            let res = update_content_by_line_number("a\nb", line, text);
            assert!(!res.success);
            assert_eq!(res.message, "invalid parameters");
        }
    }

    #[test]
    fn line_update_parse_error_wins_over_empty_text() {
        let res = update_content_by_line_number("a", "x", "");
        assert!(res.message.starts_with("failed to parse"));
    }

    #[test]
    fn line_update_out_of_range_reports_both_numbers() {
        let res = update_content_by_line_number("a\nb\nc", "5", "X");
        assert!(!res.success);
        assert!(res.message.contains("line 5"));
        assert!(res.message.contains("3 line(s)"));
    }

    #[test]
    fn line_update_keeps_embedded_newline() {
        let out = replace_line("a\nb", 1, "x\ny").unwrap();
        assert_eq!(out, "x\ny\nb");
    }

    #[test]
    fn line_update_on_empty_buffer() {
        assert_eq!(replace_line("", 1, "first").unwrap(), "first");
        assert!(replace_line("", 2, "second").is_err());
    }

    #[test]
    fn line_update_then_revert_restores_original() {
        let original = "one\ntwo\nthree";
        let edited = update_content_by_line_number(original, "2", "TWO");
        let edited = edited.updated_text.unwrap();
        let reverted = update_content_by_line_number(&edited, "2", "two");
        assert_eq!(reverted.updated_text.as_deref(), Some(original));
    }

    #[test]
    fn block_update_grows_buffer() {
        let res = update_content_by_block("a\nb\nc\nd", "2", "3", "X\nY\nZ");
        assert!(res.success);
        assert_eq!(res.updated_text.as_deref(), Some("a\nX\nY\nZ\nd"));
        assert_eq!(res.message, "updated lines 2-3");
    }

    #[test]
    fn block_update_shrinks_buffer() {
        let out = replace_block("a\nb\nc\nd", 1, 3, "Q").unwrap();
        assert_eq!(out, "Q\nd");
    }

    #[test]
    fn block_update_empty_text_is_one_empty_line() {
        let out = replace_block("a\nb\nc", 2, 2, "").unwrap();
        assert_eq!(out, "a\n\nc");
    }

    #[test]
    fn block_update_whole_buffer() {
        let out = replace_block("a\nb", 1, 2, "z").unwrap();
        assert_eq!(out, "z");
    }

    #[test]
    fn block_update_rejects_inverted_range() {
        let res = update_content_by_block("a\nb\nc", "3", "2", "x");
        assert!(!res.success);
        assert_eq!(res.message, "invalid parameters");
    }

    #[test]
    fn block_update_rejects_zero_start() {
        let res = update_content_by_block("a\nb\nc", "0", "2", "x");
        assert_eq!(res.message, "invalid parameters");
    }

    #[test]
    fn block_update_parse_failure_is_generic() {
        for (s, e) in [("x", "2"), ("1", "y"), ("", "")] {
            let res = update_content_by_block("a\nb", s, e, "x");
            assert!(!res.success);
            assert_eq!(res.message, "failed to parse line numbers");
        }
    }

    #[test]
    fn block_update_past_end_fails_gracefully() {
        let res = update_content_by_block("a\nb\nc\nd", "2", "7", "x");
        assert!(!res.success);
        assert!(res.updated_text.is_none());
        assert_eq!(
            replace_block("a\nb\nc\nd", 2, 7, "x").unwrap_err(),
            EditError::BlockOutOfRange { start: 2, end: 7, total: 4 }
        );
        assert!(replace_block("a\nb", 5, 6, "x").is_err());
    }

    #[test]
    fn result_json_uses_snake_case_and_omits_missing_text() {
        let ok = UpdateResult::success("a".into(), "done");
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["updated_text"], "a");

        let err = UpdateResult::failure(&EditError::InvalidParameters);
        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("updated_text").is_none());
        assert_eq!(json["message"], "invalid parameters");
    }
}
