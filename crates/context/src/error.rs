//! Errors from context assembly.
//!
//! Only the root chapter of a chapter-scoped build is a hard requirement.
//! Every other lookup is best-effort and never surfaces here.

use storyloom_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),

    #[error("Failed to load chapter: {0}")]
    Store(#[from] StoreError),
}
