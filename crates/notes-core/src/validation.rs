//! Length-bounded title and content value objects.
//!
//! Lengths are counted in Unicode scalar values (`char`s), not bytes, so a
//! title of one hundred `é` characters is exactly at the limit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum title length in Unicode scalar values.
pub const MIN_TITLE_LENGTH: usize = 1;

/// Maximum title length in Unicode scalar values.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Minimum content length in Unicode scalar values.
pub const MIN_CONTENT_LENGTH: usize = 1;

/// Maximum content length in Unicode scalar values.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Reasons a note field can be refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Title length outside `[MIN_TITLE_LENGTH, MAX_TITLE_LENGTH]`.
    #[error(
        "title must be between {} and {} characters, got {len}",
        MIN_TITLE_LENGTH,
        MAX_TITLE_LENGTH
    )]
    TitleLength { len: usize },

    /// Content length outside `[MIN_CONTENT_LENGTH, MAX_CONTENT_LENGTH]`.
    #[error(
        "content must be between {} and {} characters, got {len}",
        MIN_CONTENT_LENGTH,
        MAX_CONTENT_LENGTH
    )]
    ContentLength { len: usize },
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// A note title with 1 to 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    /// Validates and wraps a title.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let len = char_len(&value);
        if !(MIN_TITLE_LENGTH..=MAX_TITLE_LENGTH).contains(&len) {
            return Err(ValidationError::TitleLength { len });
        }
        Ok(Self(value))
    }

    /// Returns the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Title {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

/// Note body text with 1 to 10000 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Content(String);

impl Content {
    /// Validates and wraps note content. Content is kept verbatim.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let len = char_len(&value);
        if !(MIN_CONTENT_LENGTH..=MAX_CONTENT_LENGTH).contains(&len) {
            return Err(ValidationError::ContentLength { len });
        }
        Ok(Self(value))
    }

    /// Returns the content text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
