//! Lookup-or-create resolution of authors and genres by name.
//!
//! Resolution runs before a book is written and returns the id the book
//! should reference. It may insert a row, or merge supplied attributes into
//! an existing one, but never touches `books`.
//!
//! Two requests may race to create the same new name. The insert runs in a
//! savepoint so the losing side's unique violation does not abort the
//! caller's transaction; the savepoint is rolled back and the winner's row
//! is re-read.

use bookshelf_core::error::CoreError;
use bookshelf_core::naming::{normalize_for, EntityKind};
use bookshelf_core::types::{CalendarDate, DbId};
use sqlx::{Connection, PgConnection};

use crate::repositories::{AuthorRepo, GenreRepo};
use crate::{is_unique_violation, DbError};

/// Insert attempts before a unique-name conflict is reported as unresolved.
pub const MAX_INSERT_ATTEMPTS: u32 = 2;

/// Resolve `raw_name` to the id of a `kind` row, creating the row if absent.
///
/// Returns `Ok(None)` for a blank genre name. A blank author name is a
/// validation error. `created_date` only applies to authors: it is stored on
/// insert and merged into an existing row when provided.
pub async fn resolve(
    conn: &mut PgConnection,
    kind: EntityKind,
    raw_name: &str,
    created_date: Option<CalendarDate>,
) -> Result<Option<DbId>, DbError> {
    let Some(name) = normalize_for(kind, raw_name)? else {
        return Ok(None);
    };

    if let Some(id) = find_id(conn, kind, &name).await? {
        merge_attributes(conn, kind, id, created_date).await?;
        return Ok(Some(id));
    }

    for attempt in 1..=MAX_INSERT_ATTEMPTS {
        let mut savepoint = conn.begin().await?;
        match insert(&mut savepoint, kind, &name, created_date).await {
            Ok(id) => {
                savepoint.commit().await?;
                tracing::debug!(entity = kind.label(), id, name = %name, "Created entity");
                return Ok(Some(id));
            }
            Err(err) if is_unique_violation(&err) => {
                savepoint.rollback().await?;
                tracing::warn!(
                    entity = kind.label(),
                    name = %name,
                    attempt,
                    "Concurrent insert of the same name, re-reading",
                );
                if let Some(id) = find_id(conn, kind, &name).await? {
                    merge_attributes(conn, kind, id, created_date).await?;
                    return Ok(Some(id));
                }
            }
            Err(err) => return Err(err.into()),
        }
    }

    tracing::error!(entity = kind.label(), name = %name, "Name conflict could not be resolved");
    Err(DbError::UnresolvedConflict {
        entity: kind.label(),
        name,
    })
}

/// Resolve an author name to an id. The name must not be blank.
pub async fn resolve_author(
    conn: &mut PgConnection,
    name: &str,
    created_date: Option<CalendarDate>,
) -> Result<DbId, DbError> {
    resolve(conn, EntityKind::Author, name, created_date)
        .await?
        .ok_or_else(|| {
            DbError::Core(CoreError::Validation(
                "Author name must not be empty".into(),
            ))
        })
}

/// Resolve an optional genre name. Absent or blank means no genre.
pub async fn resolve_genre(
    conn: &mut PgConnection,
    name: Option<&str>,
) -> Result<Option<DbId>, DbError> {
    match name {
        Some(name) => resolve(conn, EntityKind::Genre, name, None).await,
        None => Ok(None),
    }
}

async fn find_id(
    conn: &mut PgConnection,
    kind: EntityKind,
    name: &str,
) -> Result<Option<DbId>, sqlx::Error> {
    match kind {
        EntityKind::Author => AuthorRepo::find_id_by_name(conn, name).await,
        EntityKind::Genre => GenreRepo::find_id_by_name(conn, name).await,
    }
}

async fn insert(
    conn: &mut PgConnection,
    kind: EntityKind,
    name: &str,
    created_date: Option<CalendarDate>,
) -> Result<DbId, sqlx::Error> {
    match kind {
        EntityKind::Author => AuthorRepo::insert(conn, name, created_date).await,
        EntityKind::Genre => GenreRepo::insert(conn, name).await,
    }
}

async fn merge_attributes(
    conn: &mut PgConnection,
    kind: EntityKind,
    id: DbId,
    created_date: Option<CalendarDate>,
) -> Result<(), sqlx::Error> {
    if let (EntityKind::Author, Some(date)) = (kind, created_date) {
        if AuthorRepo::merge_created_date(conn, id, date).await? {
            tracing::debug!(author_id = id, %date, "Updated author created date");
        }
    }
    Ok(())
}
