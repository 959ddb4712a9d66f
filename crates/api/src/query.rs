//! Query parameter types for book listing and statistics.

use bookshelf_core::error::CoreError;
use bookshelf_core::filter::BookFilter;
use serde::Deserialize;

/// Filter parameters (`?genre=&status=&author=&q=`).
///
/// The Spanish names used by the web forms (`categoria`, `estado`,
/// `autor`) are accepted as aliases. Values are raw strings so an invalid
/// status surfaces as a validation error rather than a rejection.
#[derive(Debug, Default, Deserialize)]
pub struct BookFilterParams {
    #[serde(alias = "categoria", alias = "genero")]
    pub genre: Option<String>,
    #[serde(alias = "estado")]
    pub status: Option<String>,
    #[serde(alias = "autor")]
    pub author: Option<String>,
    #[serde(alias = "search")]
    pub q: Option<String>,
}

impl BookFilterParams {
    /// Normalize into a [`BookFilter`], rejecting unknown status values.
    pub fn into_filter(self) -> Result<BookFilter, CoreError> {
        BookFilter::parse(
            self.genre.as_deref(),
            self.author.as_deref(),
            self.status.as_deref(),
            self.q.as_deref(),
        )
    }
}
