//! Book models: the joined row read from the store, its denormalized
//! response shape, and the insert/update DTO carrying resolved ids.

use bookshelf_core::book::BookDraft;
use bookshelf_core::filter::BookFilter;
use bookshelf_core::reading_status::ReadingStatus;
use bookshelf_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::genre::Genre;

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// A `books` row joined with its author and genre names.
#[derive(Debug, Clone, FromRow)]
pub struct BookRow {
    pub id: DbId,
    pub title: String,
    #[sqlx(try_from = "i16")]
    pub status: ReadingStatus,
    pub cover_url: String,
    pub description: Option<String>,
    pub added_at: Timestamp,
    pub read_count: i32,
    pub author_id: DbId,
    pub author_name: String,
    pub genre_id: Option<DbId>,
    pub genre_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Id and display name of a referenced entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedRef {
    pub id: DbId,
    pub name: String,
}

/// A book with its author and genre embedded. `genre` is `null` when the
/// book has none.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: DbId,
    pub title: String,
    pub status: ReadingStatus,
    pub cover_url: String,
    pub description: Option<String>,
    pub added_at: Timestamp,
    pub read_count: i32,
    pub author: NamedRef,
    pub genre: Option<NamedRef>,
}

impl From<BookRow> for BookRecord {
    fn from(row: BookRow) -> Self {
        let genre = match (row.genre_id, row.genre_name) {
            (Some(id), Some(name)) => Some(NamedRef { id, name }),
            _ => None,
        };
        Self {
            id: row.id,
            title: row.title,
            status: row.status,
            cover_url: row.cover_url,
            description: row.description,
            added_at: row.added_at,
            read_count: row.read_count,
            author: NamedRef {
                id: row.author_id,
                name: row.author_name,
            },
            genre,
        }
    }
}

/// Everything the library home view needs in one payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryOverview {
    /// Books matching the filter.
    pub books: Vec<BookRecord>,
    /// All pending books, regardless of the filter.
    pub pending: Vec<BookRecord>,
    /// Genres referenced by at least one book.
    pub genres: Vec<Genre>,
    /// Unfiltered number of books.
    pub total_in_library: i64,
    pub applied_filter: BookFilter,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Column values written on insert/update, with author and genre already
/// resolved to ids.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub status: ReadingStatus,
    pub cover_url: String,
    pub description: Option<String>,
    pub author_id: DbId,
    pub genre_id: Option<DbId>,
}

impl NewBook {
    pub fn from_draft(draft: &BookDraft, author_id: DbId, genre_id: Option<DbId>) -> Self {
        Self {
            title: draft.title.clone(),
            status: draft.status,
            cover_url: draft.cover_url.clone(),
            description: draft.description.clone(),
            author_id,
            genre_id,
        }
    }
}
