//! Book create/update payload and its validation.
//!
//! [`BookInput`] is what a client sends; [`BookDraft`] is the normalized,
//! validated form the store accepts. Conversion happens before any store
//! call so a rejected payload never mutates anything.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::naming::{normalize_for, normalize_optional, EntityKind};
use crate::reading_status::ReadingStatus;
use crate::types::CalendarDate;

/// Cover image used when none is supplied.
pub const DEFAULT_COVER_URL: &str = "https://via.placeholder.com/150";

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: u64 = 255;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LEN: u64 = 2000;

/// Create/update payload as received from a client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub title: String,
    /// Author name; resolved (or created) before the book is written.
    pub author: String,
    /// Genre name; blank means no genre.
    pub genre: Option<String>,
    /// Wire literal, defaults to `Pendiente`.
    pub status: Option<String>,
    pub cover_url: Option<String>,
    pub description: Option<String>,
    /// Merged onto the author when provided.
    pub created_date: Option<CalendarDate>,
}

/// A validated, normalized book payload.
///
/// Length bounds apply to the trimmed values, which are what gets stored.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct BookDraft {
    #[validate(length(max = MAX_TITLE_LEN))]
    pub title: String,
    pub author_name: String,
    pub genre_name: Option<String>,
    pub status: ReadingStatus,
    pub cover_url: String,
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: Option<String>,
    pub author_created_date: Option<CalendarDate>,
}

impl BookInput {
    /// Validate and normalize into a [`BookDraft`].
    pub fn into_draft(self) -> Result<BookDraft, CoreError> {
        let title = normalize_optional(Some(&self.title))
            .ok_or_else(|| CoreError::Validation("Title must not be empty".to_string()))?;

        // Author is required; a blank genre collapses to None.
        let author_name = normalize_for(EntityKind::Author, &self.author)?
            .ok_or_else(|| CoreError::Validation("Author name must not be empty".to_string()))?;
        let genre_name = match self.genre.as_deref() {
            Some(raw) => normalize_for(EntityKind::Genre, raw)?,
            None => None,
        };

        let status = normalize_optional(self.status.as_deref())
            .map(|s| ReadingStatus::parse(&s))
            .transpose()?
            .unwrap_or_default();

        let cover_url = normalize_optional(self.cover_url.as_deref())
            .unwrap_or_else(|| DEFAULT_COVER_URL.to_string());

        let draft = BookDraft {
            title,
            author_name,
            genre_name,
            status,
            cover_url,
            description: normalize_optional(self.description.as_deref()),
            author_created_date: self.created_date,
        };
        draft
            .validate()
            .map_err(|e| CoreError::Validation(describe_errors(&e)))?;
        Ok(draft)
    }
}

/// One line per offending field, without echoing the submitted value.
fn describe_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            match errs.iter().find_map(|e| e.params.get("max")) {
                Some(max) => format!("{field} must be at most {max} characters"),
                None => format!("{field} is invalid"),
            }
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
