//! Note CRUD routes.
//!
//! This module implements the note endpoints:
//! - GET /api/notes - List all notes
//! - POST /api/notes - Create a note
//! - GET /api/notes/{id} - Fetch a note
//! - PUT /api/notes/{id} - Partially update a note
//! - DELETE /api/notes/{id} - Delete a note
//!
//! Titles are trimmed of surrounding whitespace on create and update;
//! content is stored verbatim. Unknown and malformed ids both answer 404.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use notes_core::{Note, NoteId, NotePatch};

use crate::error::{ApiError, ApiResult};
use crate::extract::JsonBody;
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Request body for POST /api/notes.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateNoteRequest {
    /// Note title. Trimmed before validation.
    pub title: String,
    /// Note content. Stored verbatim.
    pub content: String,
}

/// Request body for PUT /api/notes/{id}.
///
/// A missing key and `null` both leave the field unchanged.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl UpdateNoteRequest {
    /// Convert into a store patch, trimming the title.
    fn into_patch(self) -> NotePatch {
        NotePatch {
            title: self.title.map(|t| t.trim().to_string()),
            content: self.content,
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse a path id. Anything that is not a note id is simply not found.
fn parse_note_id(raw: &str) -> ApiResult<NoteId> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("note {raw}")))
}

fn not_found(id: NoteId) -> ApiError {
    ApiError::NotFound(format!("note {id}"))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/notes - List all notes.
///
/// # Response
///
/// - 200 OK: JSON array of notes, in no particular order
async fn list_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
    let notes = state.store().list();
    tracing::info!(count = notes.len(), "Listed notes");
    Json(notes)
}

/// POST /api/notes - Create a note.
///
/// # Request
///
/// Body: `{ "title": "Hello", "content": "World" }`
///
/// # Response
///
/// - 201 Created: the new note
/// - 400 Bad Request: invalid JSON, or title/content out of bounds
async fn create_note(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let note = state
        .store()
        .create(request.title.trim(), request.content)?;

    tracing::info!(note_id = %note.id(), "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /api/notes/{id} - Fetch a note.
///
/// # Response
///
/// - 200 OK: the note
/// - 404 Not Found: empty body
async fn get_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Note>> {
    let id = parse_note_id(&raw_id)?;
    let note = state.store().get(&id).ok_or_else(|| not_found(id))?;
    Ok(Json(note))
}

/// PUT /api/notes/{id} - Partially update a note.
///
/// # Request
///
/// Body: `{ "title": "New title" }`, `{ "content": "..." }`, or both.
/// `null` or an absent key leaves the field unchanged.
///
/// # Response
///
/// - 200 OK: the updated note
/// - 400 Bad Request: invalid JSON, or a supplied field out of bounds
/// - 404 Not Found: empty body
async fn update_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(request): JsonBody<UpdateNoteRequest>,
) -> ApiResult<Json<Note>> {
    let id = parse_note_id(&raw_id)?;
    let note = state.store().update(&id, request.into_patch())?;

    tracing::info!(note_id = %id, "Note updated");

    Ok(Json(note))
}

/// DELETE /api/notes/{id} - Delete a note.
///
/// # Response
///
/// - 204 No Content
/// - 404 Not Found: empty body
async fn delete_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_note_id(&raw_id)?;
    if !state.store().delete(&id) {
        return Err(not_found(id));
    }

    tracing::info!(note_id = %id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_trims_title_only() {
        let request: UpdateNoteRequest =
            serde_json::from_str(r#"{"title": "  Hi  ", "content": "  body  "}"#).unwrap();
        let patch = request.into_patch();
        assert_eq!(patch.title.as_deref(), Some("Hi"));
        assert_eq!(patch.content.as_deref(), Some("  body  "));
    }

    #[test]
    fn test_update_request_null_and_missing_are_absent() {
        let request: UpdateNoteRequest =
            serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert!(request.into_patch().is_empty());

        let request: UpdateNoteRequest = serde_json::from_str("{}").unwrap();
        assert!(request.into_patch().is_empty());
    }

    #[test]
    fn test_create_request_requires_both_fields() {
        assert!(serde_json::from_str::<CreateNoteRequest>(r#"{"title": "x"}"#).is_err());
        let request: CreateNoteRequest =
            serde_json::from_str(r#"{"title": "x", "content": "y"}"#).unwrap();
        assert_eq!(request.title, "x");
        assert_eq!(request.content, "y");
    }

    #[test]
    fn test_parse_note_id() {
        let id = NoteId::new();
        assert_eq!(parse_note_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_note_id("nope"),
            Err(ApiError::NotFound(_))
        ));
    }
}
