//! Repository for the `books` table.
//!
//! Reads return [`BookRecord`]s (book joined with author and genre names),
//! always ordered by book id so a fixed filter yields a stable sequence.

use bookshelf_core::filter::BookFilter;
use bookshelf_core::reading_status::ReadingStatus;
use bookshelf_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::book::{BookRecord, BookRow, NewBook};
use crate::repositories::book_filter::{filter_arguments, BOOK_JOINS, FILTER_PREDICATES};

/// Columns selected for a joined book row.
const RECORD_COLUMNS: &str = "\
    b.id, b.title, b.status_id AS status, b.cover_url, b.description, \
    b.added_at, b.read_count, b.author_id, a.name AS author_name, \
    b.genre_id, g.name AS genre_name";

/// Provides CRUD and filtered listing for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a book, returning its id. Author and genre must already exist.
    pub async fn insert<'e, E>(executor: E, input: &NewBook) -> Result<DbId, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO books (title, status_id, cover_url, description, author_id, genre_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(&input.title)
        .bind(input.status.id())
        .bind(&input.cover_url)
        .bind(&input.description)
        .bind(input.author_id)
        .bind(input.genre_id)
        .fetch_one(executor)
        .await
    }

    /// Replace the editable columns of a book.
    ///
    /// `added_at` and `read_count` are untouched. Returns `false` if no row
    /// with the given `id` exists.
    pub async fn update<'e, E>(
        executor: E,
        id: DbId,
        input: &NewBook,
    ) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            "UPDATE books SET \
                title = $2, \
                status_id = $3, \
                cover_url = $4, \
                description = $5, \
                author_id = $6, \
                genre_id = $7 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(input.status.id())
        .bind(&input.cover_url)
        .bind(&input.description)
        .bind(input.author_id)
        .bind(input.genre_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a book by ID. Its author and genre are kept.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count one more read and mark the book as read.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn record_read(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE books SET read_count = read_count + 1, status_id = $2 WHERE id = $1",
        )
        .bind(id)
        .bind(ReadingStatus::Read.id())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find one book with its author and genre names.
    pub async fn find_record<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<BookRecord>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {RECORD_COLUMNS} {BOOK_JOINS} WHERE b.id = $1");
        let row = sqlx::query_as::<_, BookRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(row.map(BookRecord::from))
    }

    /// List books matching `filter`, ordered by id.
    ///
    /// A filter value that matches nothing yields an empty list.
    pub async fn list_records(
        pool: &PgPool,
        filter: &BookFilter,
    ) -> Result<Vec<BookRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {RECORD_COLUMNS} {BOOK_JOINS} WHERE {FILTER_PREDICATES} ORDER BY b.id"
        );
        let rows = sqlx::query_as_with::<_, BookRow, _>(&query, filter_arguments(filter)?)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(BookRecord::from).collect())
    }

    /// All pending books, independent of any other active filter.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<BookRecord>, sqlx::Error> {
        let filter = BookFilter::default().with_status(ReadingStatus::Pending);
        Self::list_records(pool, &filter).await
    }

    /// Total number of books, unfiltered.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
            .fetch_one(pool)
            .await
    }
}
