//! Repository for the `authors` table.
//!
//! Write-path methods are generic over the executor so they can run on a
//! pooled connection or inside a caller's transaction.

use bookshelf_core::types::{CalendarDate, DbId};
use sqlx::{PgExecutor, PgPool};

use crate::models::author::Author;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_date, created_at, updated_at";

/// Provides lookup, insert and merge operations for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// Find an author id by exact name.
    pub async fn find_id_by_name<'e, E>(
        executor: E,
        name: &str,
    ) -> Result<Option<DbId>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM authors WHERE name = $1")
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// Insert a new author, returning its id.
    ///
    /// A duplicate name fails with a unique violation on `uq_authors_name`.
    pub async fn insert<'e, E>(
        executor: E,
        name: &str,
        created_date: Option<CalendarDate>,
    ) -> Result<DbId, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO authors (name, created_date) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(created_date)
        .fetch_one(executor)
        .await
    }

    /// Overwrite `created_date` when it differs. Returns `true` if the row changed.
    pub async fn merge_created_date<'e, E>(
        executor: E,
        id: DbId,
        created_date: CalendarDate,
    ) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            "UPDATE authors SET created_date = $2 \
             WHERE id = $1 AND created_date IS DISTINCT FROM $2",
        )
        .bind(id)
        .bind(created_date)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List all authors ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors ORDER BY name, id");
        sqlx::query_as::<_, Author>(&query).fetch_all(pool).await
    }
}
