//! Filter criteria shared by book listing and statistics.
//!
//! A [`BookFilter`] is built once from raw request parameters and then
//! handed to the store, which maps each present field to one predicate.
//! Blank values are treated as absent; an unknown status is rejected.

use serde::Serialize;

use crate::error::CoreError;
use crate::naming::normalize_optional;
use crate::reading_status::ReadingStatus;

/// Optional constraints applied to book queries. All present fields are
/// combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookFilter {
    /// Exact genre name.
    pub genre: Option<String>,
    /// Exact author name.
    pub author: Option<String>,
    /// Exact status.
    pub status: Option<ReadingStatus>,
    /// Case-insensitive substring of title, author name or genre name.
    pub search: Option<String>,
}

impl BookFilter {
    /// Build a filter from raw request values.
    pub fn parse(
        genre: Option<&str>,
        author: Option<&str>,
        status: Option<&str>,
        search: Option<&str>,
    ) -> Result<Self, CoreError> {
        let status = normalize_optional(status)
            .map(|s| ReadingStatus::parse(&s))
            .transpose()?;

        Ok(Self {
            genre: normalize_optional(genre),
            author: normalize_optional(author),
            status,
            search: normalize_optional(search),
        })
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_status(mut self, status: ReadingStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// True when no constraint is present.
    pub fn is_empty(&self) -> bool {
        self.genre.is_none()
            && self.author.is_none()
            && self.status.is_none()
            && self.search.is_none()
    }

    /// `ILIKE` pattern for the search term, with wildcards in the term escaped.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|term| {
            let escaped = term
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_");
            format!("%{escaped}%")
        })
    }
}
