//! Repository for the `genres` table.

use bookshelf_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::genre::Genre;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides lookup and insert operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Find a genre id by exact name.
    pub async fn find_id_by_name<'e, E>(
        executor: E,
        name: &str,
    ) -> Result<Option<DbId>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM genres WHERE name = $1")
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// Insert a new genre, returning its id.
    ///
    /// A duplicate name fails with a unique violation on `uq_genres_name`.
    pub async fn insert<'e, E>(executor: E, name: &str) -> Result<DbId, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, DbId>("INSERT INTO genres (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(executor)
            .await
    }

    /// Genres referenced by at least one book, ordered by name.
    ///
    /// Derived on every call; a genre whose last book is deleted drops out.
    pub async fn list_in_use(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM genres \
             WHERE id IN (SELECT DISTINCT genre_id FROM books WHERE genre_id IS NOT NULL) \
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }
}
