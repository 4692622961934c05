//! Error types for story storage access.
//!
//! Uses `thiserror` for ergonomic error definitions. Every collaborator
//! trait in [`crate::source`] reports failures through [`StoreError`];
//! an entity that simply does not exist is `Ok(None)` or an omitted
//! element, never an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Failed to load story snapshot at {path}: {reason}")]
    Snapshot { path: PathBuf, reason: String },
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(format!("Serialization failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_error_displays_path() {
        let err = StoreError::Snapshot {
            path: PathBuf::from("/tmp/story.json"),
            reason: "missing field `chapters`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/story.json"));
        assert!(msg.contains("chapters"));
    }

    #[test]
    fn serde_error_converts_to_storage() {
        let err: StoreError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, StoreError::Storage(_)));
    }
}
