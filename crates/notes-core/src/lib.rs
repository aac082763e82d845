//! notes-core: Domain types for the notes backend
//!
//! This crate provides:
//! - `Note`, the single domain entity, and its time-ordered `NoteId`
//! - Length-bounded `Title` and `Content` value objects
//! - `NotePatch` for partial updates with an explicit optional per field

pub mod types;
pub mod validation;

pub use types::{Note, NoteId, NotePatch, ParseNoteIdError};
pub use validation::{
    Content, Title, ValidationError, MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH, MIN_CONTENT_LENGTH,
    MIN_TITLE_LENGTH,
};
