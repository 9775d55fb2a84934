use crate::EditError;

/// Split a buffer into lines on `\n`.
///
/// Unlike [`str::lines`], this keeps every piece: `""` is one empty line and a
/// trailing `\n` produces a trailing empty line. `\r` is not stripped.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// Join lines back into a buffer with `\n`.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}

/// Number of lines in `content`, as seen by [`split_lines`].
pub fn line_count(content: &str) -> usize {
    content.split('\n').count()
}

/// Parse a decimal line number as received at the string boundary.
///
/// An optional leading sign is accepted and the sign is kept; range checks are
/// the caller's job. Surrounding whitespace is rejected.
pub fn parse_line_number(s: &str) -> Result<i64, EditError> {
    s.parse::<i64>().map_err(EditError::ParseLineNumber)
}

/// Convert a validated 1-based line number into a `usize`.
///
/// Returns `None` for anything below 1.
pub(crate) fn to_one_based(n: i64) -> Option<usize> {
    if n < 1 {
        return None;
    }
    // Saturate on targets where usize is narrower than i64; such a line is
    // out of range for any buffer anyway.
    Some(usize::try_from(n).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_empty_pieces() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn join_inverts_split() {
        for text in ["", "a", "a\n", "\n\n", "x\ny\nz"] {
            assert_eq!(join_lines(&split_lines(text)), text);
        }
    }

    #[test]
    fn count_matches_split() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("a\nb\nc"), 3);
        assert_eq!(line_count("a\nb\n"), 3);
    }

    #[test]
    fn parse_accepts_signed_decimal() {
        assert_eq!(parse_line_number("42").unwrap(), 42);
        assert_eq!(parse_line_number("+7").unwrap(), 7);
        assert_eq!(parse_line_number("-3").unwrap(), -3);
    }

    #[test]
    fn parse_rejects_garbage() {
        for s in ["", "abc", " 1", "1 ", "1.5", "0x10"] {
            let err = parse_line_number(s).unwrap_err();
            assert!(matches!(err, EditError::ParseLineNumber(_)), "{s:?}");
            assert!(err.to_string().starts_with("failed to parse line number"));
        }
    }

    #[test]
    fn one_based_rejects_zero_and_negative() {
        assert_eq!(to_one_based(0), None);
        assert_eq!(to_one_based(-1), None);
        assert_eq!(to_one_based(1), Some(1));
    }
}
