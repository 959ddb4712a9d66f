//! Author entity model.

use bookshelf_core::types::{CalendarDate, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `authors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: DbId,
    pub name: String,
    /// When the author's first work was added or became known.
    pub created_date: Option<CalendarDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
