//! Bookmark record and the validated write shapes built from request input

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::{Rating, ValidationError};
use crate::sanitize::sanitize;

/// Stored bookmark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub rating: i32,
    pub description: String,
}

impl Bookmark {
    /// Neutralize markup in the free-text fields before echoing to a client.
    pub fn sanitized(self) -> Self {
        Self {
            title: sanitize(&self.title),
            description: sanitize(&self.description),
            ..self
        }
    }
}

/// Raw request body for create and update.
///
/// Every recognized key is optional so that absence can be reported by
/// name; unknown keys are dropped during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookmarkInput {
    pub title: Option<Value>,
    pub url: Option<Value>,
    pub rating: Option<Value>,
    pub description: Option<Value>,
}

/// Validated insert candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub rating: Rating,
    pub description: String,
}

impl TryFrom<BookmarkInput> for NewBookmark {
    type Error = ValidationError;

    /// Presence is checked in the order title, url, rating, description;
    /// the rating range only after all four are present.
    fn try_from(input: BookmarkInput) -> Result<Self, Self::Error> {
        let title = required_text("title", input.title)?;
        let url = required_text("url", input.url)?;
        let rating = input
            .rating
            .filter(|v| !is_blank(v))
            .ok_or(ValidationError::MissingField { field: "rating" })?;
        let description = required_text("description", input.description)?;

        Ok(Self {
            title,
            url,
            rating: Rating::from_json(&rating)?,
            description,
        })
    }
}

/// Validated partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub rating: Option<Rating>,
    pub description: Option<String>,
}

impl BookmarkPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.rating.is_none()
            && self.description.is_none()
    }
}

impl TryFrom<BookmarkInput> for BookmarkPatch {
    type Error = ValidationError;

    fn try_from(input: BookmarkInput) -> Result<Self, Self::Error> {
        let rating = match input.rating.filter(|v| !is_blank(v)) {
            Some(v) => Some(Rating::from_json(&v)?),
            None => None,
        };

        let patch = Self {
            title: optional_text("title", input.title)?,
            url: optional_text("url", input.url)?,
            rating,
            description: optional_text("description", input.description)?,
        };

        if patch.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }
        Ok(patch)
    }
}

fn is_blank(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.trim().is_empty())
}

fn optional_text(
    field: &'static str,
    value: Option<Value>,
) -> Result<Option<String>, ValidationError> {
    match value {
        None => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ValidationError::InvalidField { field }),
    }
}

fn required_text(field: &'static str, value: Option<Value>) -> Result<String, ValidationError> {
    optional_text(field, value)?.ok_or(ValidationError::MissingField { field })
}
