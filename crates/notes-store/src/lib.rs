//! notes-store: Storage layer for the notes backend
//!
//! This crate provides:
//! - `NoteStore`, a reader/writer-locked map from `NoteId` to `Note`
//! - Validated create and partial update through `notes-core`
//!
//! # Usage
//!
//! ```rust
//! use notes_store::{NotePatch, NoteStore};
//!
//! let store = NoteStore::new();
//! let note = store.create("Hello", "World").unwrap();
//!
//! let fetched = store.get(&note.id()).unwrap();
//! assert_eq!(fetched, note);
//!
//! let renamed = store
//!     .update(&note.id(), NotePatch::default().title("Hi"))
//!     .unwrap();
//! assert_eq!(renamed.title(), "Hi");
//!
//! assert!(store.delete(&note.id()));
//! assert!(store.get(&note.id()).is_none());
//! ```

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::NoteStore;

// Re-export notes-core for downstream crates
pub use notes_core;
pub use notes_core::{Note, NoteId, NotePatch, ValidationError};
