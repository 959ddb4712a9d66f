//! Book write path and composite reads.
//!
//! Each write resolves the author and genre first and then persists the
//! book, all inside one transaction: a failure at any step leaves no
//! lazily created author or genre behind.

use bookshelf_core::book::BookDraft;
use bookshelf_core::error::CoreError;
use bookshelf_core::filter::BookFilter;
use bookshelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::book::{BookRecord, LibraryOverview, NewBook};
use crate::repositories::{BookRepo, GenreRepo};
use crate::resolver::{resolve_author, resolve_genre};
use crate::DbError;

fn book_not_found(id: DbId) -> DbError {
    DbError::Core(CoreError::NotFound { entity: "Book", id })
}

/// Create a book, resolving (or creating) its author and genre.
pub async fn create_book(pool: &PgPool, draft: &BookDraft) -> Result<BookRecord, DbError> {
    let mut tx = pool.begin().await?;

    let author_id = resolve_author(&mut tx, &draft.author_name, draft.author_created_date).await?;
    let genre_id = resolve_genre(&mut tx, draft.genre_name.as_deref()).await?;

    let id = BookRepo::insert(&mut *tx, &NewBook::from_draft(draft, author_id, genre_id)).await?;
    let record = BookRepo::find_record(&mut *tx, id)
        .await?
        .ok_or_else(|| book_not_found(id))?;

    tx.commit().await?;
    tracing::info!(book_id = id, author_id, ?genre_id, "Book created");
    Ok(record)
}

/// Replace a book's editable fields, resolving the (possibly new) author
/// and genre. Fails with `NotFound` when the book does not exist.
pub async fn update_book(
    pool: &PgPool,
    id: DbId,
    draft: &BookDraft,
) -> Result<BookRecord, DbError> {
    let mut tx = pool.begin().await?;

    let author_id = resolve_author(&mut tx, &draft.author_name, draft.author_created_date).await?;
    let genre_id = resolve_genre(&mut tx, draft.genre_name.as_deref()).await?;

    let updated =
        BookRepo::update(&mut *tx, id, &NewBook::from_draft(draft, author_id, genre_id)).await?;
    if !updated {
        // Dropping the transaction rolls back any author/genre created above.
        return Err(book_not_found(id));
    }

    let record = BookRepo::find_record(&mut *tx, id)
        .await?
        .ok_or_else(|| book_not_found(id))?;

    tx.commit().await?;
    tracing::info!(book_id = id, author_id, ?genre_id, "Book updated");
    Ok(record)
}

/// Delete a book. Its author and genre are kept.
pub async fn delete_book(pool: &PgPool, id: DbId) -> Result<(), DbError> {
    if BookRepo::delete(pool, id).await? {
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    } else {
        Err(book_not_found(id))
    }
}

/// Count one more read of a book and mark it as read.
pub async fn record_read(pool: &PgPool, id: DbId) -> Result<BookRecord, DbError> {
    if !BookRepo::record_read(pool, id).await? {
        return Err(book_not_found(id));
    }
    let record = get_book(pool, id).await?;
    tracing::info!(book_id = id, read_count = record.read_count, "Book read recorded");
    Ok(record)
}

/// Fetch one book with its author and genre.
pub async fn get_book(pool: &PgPool, id: DbId) -> Result<BookRecord, DbError> {
    BookRepo::find_record(pool, id)
        .await?
        .ok_or_else(|| book_not_found(id))
}

/// Filtered list, pending list, genres in use and library total in one call.
pub async fn library_overview(
    pool: &PgPool,
    filter: &BookFilter,
) -> Result<LibraryOverview, sqlx::Error> {
    let books = BookRepo::list_records(pool, filter).await?;
    let pending = BookRepo::list_pending(pool).await?;
    let genres = GenreRepo::list_in_use(pool).await?;
    // An unfiltered listing already holds every book.
    let total_in_library = if filter.is_empty() {
        books.len() as i64
    } else {
        BookRepo::count_all(pool).await?
    };

    Ok(LibraryOverview {
        books,
        pending,
        genres,
        total_in_library,
        applied_filter: filter.clone(),
    })
}
