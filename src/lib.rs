//! lnedit — Line-Numbered Text Editing
//!
//! Re-exports the string-based editing operations from `lnedit-core` for the
//! `lnedit` and `lnview` CLIs and the optional Python extension.

pub mod cli;

#[cfg(feature = "pyo3")]
mod python;

pub use lnedit_core::{
    add_line_numbers, add_line_numbers_range, join_lines, line_count, parse_line_number,
    replace_block, replace_line, split_lines, update_content_by_block,
    update_content_by_line_number, EditError, EditRequest, UpdateResult, NO_CONTENT,
};

/// Install the stderr log subscriber used by the binaries.
///
/// Verbosity comes from `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}
