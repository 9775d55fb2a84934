use serde::{Deserialize, Serialize};

use crate::editor::{update_content_by_block, update_content_by_line_number, UpdateResult};
use crate::EditError;

/// An edit as it arrives from a tool call, with line numbers still as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum EditRequest {
    UpdateContentByLineNumber {
        line_number: String,
        new_content: String,
    },
    UpdateContentByBlock {
        start_line: String,
        end_line: String,
        new_content: String,
    },
}

impl EditRequest {
    pub fn from_json(s: &str) -> Result<Self, EditError> {
        serde_json::from_str(s).map_err(|e| EditError::Request(e.to_string()))
    }

    /// Apply the request to `content`.
    pub fn apply(&self, content: &str) -> UpdateResult {
        match self {
            EditRequest::UpdateContentByLineNumber {
                line_number,
                new_content,
            } => update_content_by_line_number(content, line_number, new_content),
            EditRequest::UpdateContentByBlock {
                start_line,
                end_line,
                new_content,
            } => update_content_by_block(content, start_line, end_line, new_content),
        }
    }
}
