use std::path::PathBuf;

use thiserror::Error;

/// Every way an export run can fail. None of these are recovered from; they
/// abort the run and surface in `main`.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("work item {item_id}: command failed: {stderr}")]
    CommandExecution { item_id: u64, stderr: String },

    #[error("work item {item_id}: response is not valid JSON")]
    ResponseParse {
        item_id: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error("work item {item_id}: missing required field `{field}`")]
    MalformedItem { item_id: u64, field: &'static str },

    #[error("work item {item_id}: unknown work item type `{value}`")]
    UnknownItemType { item_id: u64, value: String },

    #[error("work item {item_id}: failed to convert description to markdown")]
    Markup {
        item_id: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("work item {item_id}: failed to encode tags")]
    TagEncode {
        item_id: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error("nothing to export: no work items were collected")]
    EmptyExport,

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// The work item the failure is attributed to, if any.
    pub fn item_id(&self) -> Option<u64> {
        match self {
            ExportError::CommandExecution { item_id, .. }
            | ExportError::ResponseParse { item_id, .. }
            | ExportError::MalformedItem { item_id, .. }
            | ExportError::UnknownItemType { item_id, .. }
            | ExportError::Markup { item_id, .. }
            | ExportError::TagEncode { item_id, .. } => Some(*item_id),
            ExportError::EmptyExport | ExportError::Io { .. } => None,
        }
    }
}
