//! lnedit — Line-Numbered Text Editing (core library)
//!
//! Pure operations over `\n`-delimited text: a numbered view for display, and
//! replacement of a single line or an inclusive block of lines addressed by
//! 1-based line numbers. Every operation takes the buffer by reference and
//! returns a new one.

mod editor;
mod lines;
mod request;
mod view;

pub use editor::{
    replace_block, replace_line, update_content_by_block, update_content_by_line_number,
    UpdateResult,
};
pub use lines::{join_lines, line_count, parse_line_number, split_lines};
pub use request::EditRequest;
pub use view::{add_line_numbers, add_line_numbers_range, NO_CONTENT};

use std::num::ParseIntError;

/// Library error type.
///
/// The `Display` text doubles as the `message` of a failed [`UpdateResult`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("failed to parse line number: {0}")]
    ParseLineNumber(#[source] ParseIntError),

    #[error("failed to parse line numbers")]
    ParseRange,

    #[error("invalid parameters")]
    InvalidParameters,

    #[error("line {line} is out of range: text has {total} line(s)")]
    LineOutOfRange { line: usize, total: usize },

    #[error("lines {start}-{end} are out of range: text has {total} line(s)")]
    BlockOutOfRange {
        start: usize,
        end: usize,
        total: usize,
    },

    #[error("invalid view range {start}-{end}: text has {total} line(s)")]
    InvalidViewRange {
        start: usize,
        end: usize,
        total: usize,
    },

    #[error("invalid request: {0}")]
    Request(String),
}
