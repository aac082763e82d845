//! Core data types for the notes backend.
//!
//! A `Note` only exists in validated form: its constructor and its update
//! path both go through the `Title` and `Content` value objects, so a stored
//! note always satisfies the length bounds.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::validation::{Content, Title, ValidationError};

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// Wraps a UUID v7: the leading 48 bits are a millisecond timestamp, so ids
/// sort by creation time. Ids minted by one process are strictly increasing,
/// including within the same millisecond.
///
/// The only accepted text form is the lowercase hyphenated one that
/// `Display` produces. Other UUID spellings do not name a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Mints a new time-ordered NoteId.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a note id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a note id: {0:?}")]
pub struct ParseNoteIdError(String);

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseNoteIdError(s.to_string());
        let uuid = Uuid::try_parse(s).map_err(|_| invalid())?;

        let mut buf = Uuid::encode_buffer();
        if uuid.hyphenated().encode_lower(&mut buf) != s {
            return Err(invalid());
        }
        Ok(Self(uuid))
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Core Domain Types
// ============================================================================

/// A titled text note with server-generated id and timestamps.
///
/// Serializes as `{id, title, content, createdAt, updatedAt}` with RFC 3339
/// timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: NoteId,
    title: Title,
    content: Content,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Note {
    /// Validates `title` and `content` and mints a new note.
    ///
    /// On success the note has a fresh id and `created_at == updated_at`.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = Title::new(title)?;
        let content = Content::new(content)?;
        let now = Utc::now();

        Ok(Self {
            id: NoteId::new(),
            title,
            content,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the supplied fields in place and advances `updated_at`.
    ///
    /// `updated_at` always moves past its previous value, even when neither
    /// field is supplied. `id` and `created_at` never change.
    pub fn revise(&mut self, title: Option<Title>, content: Option<Content>) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        self.updated_at = next_timestamp(self.updated_at);
    }

    #[must_use]
    pub const fn id(&self) -> NoteId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    #[must_use]
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Current time, or one nanosecond past `previous` if the clock has not
/// moved beyond it.
fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::nanoseconds(1)
    }
}

/// A partial update to a note.
///
/// `None` leaves the field unchanged. `Some(value)` replaces it, and the new
/// value must pass the same validation as on creation. In JSON both a
/// missing key and `null` decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePatch {
    /// Replacement title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Replacement content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl NotePatch {
    /// Sets the replacement title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement content.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Validates the supplied fields without touching any note.
    pub fn validate(self) -> Result<(Option<Title>, Option<Content>), ValidationError> {
        let title = self.title.map(Title::new).transpose()?;
        let content = self.content.map(Content::new).transpose()?;
        Ok((title, content))
    }

    /// Returns true if the patch replaces no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH};

    #[test]
    fn new_note_has_matching_timestamps() {
        let note = Note::new("title", "content").unwrap();
        assert!(!note.id().to_string().is_empty());
        assert_eq!(note.created_at(), note.updated_at());
        assert_eq!(note.title(), "title");
        assert_eq!(note.content(), "content");
    }

    #[test]
    fn new_note_refuses_out_of_bounds() {
        assert!(matches!(
            Note::new("", "content"),
            Err(ValidationError::TitleLength { len: 0 })
        ));
        assert!(matches!(
            Note::new("t".repeat(MAX_TITLE_LENGTH + 1), "content"),
            Err(ValidationError::TitleLength { .. })
        ));
        assert!(matches!(
            Note::new("title", ""),
            Err(ValidationError::ContentLength { len: 0 })
        ));
        assert!(matches!(
            Note::new("title", "c".repeat(MAX_CONTENT_LENGTH + 1)),
            Err(ValidationError::ContentLength { .. })
        ));
    }

    #[test]
    fn note_id_display_fromstr() {
        let id = NoteId::new();
        let parsed: NoteId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn note_id_rejects_garbage() {
        assert!("not-a-note-id".parse::<NoteId>().is_err());
        assert!("".parse::<NoteId>().is_err());
    }

    #[test]
    fn note_ids_are_strictly_increasing() {
        let ids: Vec<NoteId> = (0..1000).map(|_| NoteId::new()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn note_id_is_version_7() {
        assert_eq!(NoteId::new().as_uuid().get_version_num(), 7);
    }

    #[test]
    fn note_id_rejects_other_uuid_spellings() {
        let id = NoteId::new();
        let canonical = id.to_string();
        let simple = id.as_uuid().simple().to_string();
        let aliases = [
            simple.clone(),
            canonical.to_uppercase(),
            format!("{{{canonical}}}"),
            format!("urn:uuid:{canonical}"),
            format!(" {canonical}"),
        ];

        for alias in aliases {
            assert_eq!(
                alias.parse::<NoteId>(),
                Err(ParseNoteIdError(alias.clone())),
                "{alias} should not parse"
            );
        }
        assert_eq!(canonical.parse::<NoteId>(), Ok(id));
    }

    #[test]
    fn note_id_deserializes_canonical_only() {
        let id = NoteId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(serde_json::from_str::<NoteId>(&json).unwrap(), id);

        let upper = json.to_uppercase();
        assert!(serde_json::from_str::<NoteId>(&upper).is_err());
    }

    #[test]
    fn revise_with_nothing_only_advances_updated_at() {
        let note = Note::new("title", "content").unwrap();
        let mut updated = note.clone();
        updated.revise(None, None);

        assert_eq!(updated.id(), note.id());
        assert_eq!(updated.title(), "title");
        assert_eq!(updated.content(), "content");
        assert_eq!(updated.created_at(), note.created_at());
        assert!(updated.updated_at() > note.updated_at());
    }

    #[test]
    fn revise_replaces_supplied_fields() {
        let mut note = Note::new("title", "content").unwrap();

        let (title, content) = NotePatch::default().title("renamed").validate().unwrap();
        note.revise(title, content);
        assert_eq!(note.title(), "renamed");
        assert_eq!(note.content(), "content");

        let (title, content) = NotePatch::default().content("rewritten").validate().unwrap();
        note.revise(title, content);
        assert_eq!(note.title(), "renamed");
        assert_eq!(note.content(), "rewritten");
    }

    #[test]
    fn empty_replacement_fails_validation() {
        let result = NotePatch::default().title("").validate();
        assert_eq!(result, Err(ValidationError::TitleLength { len: 0 }));
    }

    #[test]
    fn validate_patch_reports_first_bad_field() {
        let (title, content) = NotePatch::default().title("ok").validate().unwrap();
        assert_eq!(title.unwrap().as_str(), "ok");
        assert!(content.is_none());

        let result = NotePatch::default()
            .title("ok")
            .content("")
            .validate();
        assert_eq!(result, Err(ValidationError::ContentLength { len: 0 }));
    }

    #[test]
    fn next_timestamp_never_goes_backwards() {
        let future = Utc::now() + Duration::hours(1);
        assert_eq!(next_timestamp(future), future + Duration::nanoseconds(1));
    }

    #[test]
    fn note_serializes_camel_case() {
        let note = Note::new("Hello", "World").unwrap();
        let json = serde_json::to_value(&note).unwrap();

        assert_eq!(json["id"], note.id().to_string());
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["content"], "World");
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
        assert!(json.get("created_at").is_none());

        let created = json["createdAt"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(created).is_ok());
    }

    #[test]
    fn patch_deserializes_missing_and_null_as_absent() {
        let patch: NotePatch = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert!(patch.is_empty());

        let patch: NotePatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let patch: NotePatch = serde_json::from_str(r#"{"content": ""}"#).unwrap();
        assert_eq!(patch.content.as_deref(), Some(""));
        assert!(patch.title.is_none());
    }
}
