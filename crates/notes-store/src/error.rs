//! Error types for the storage layer.

use notes_core::{NoteId, ValidationError};
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Note not found.
    #[error("note not found: {0}")]
    NoteNotFound(NoteId),

    /// Title or content outside the allowed bounds.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
