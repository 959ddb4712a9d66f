//! SQL rendering of [`BookFilter`].
//!
//! Every filtered query (listing, total count, per-status count) shares the
//! same joins, predicate list and argument order, so a filter always selects
//! the same book set no matter which query consumes it.

use bookshelf_core::filter::BookFilter;
use sqlx::postgres::PgArguments;
use sqlx::Arguments;

/// Joins that make author and genre names available as `a.name` / `g.name`.
pub(crate) const BOOK_JOINS: &str = "\
    FROM books b \
    JOIN authors a ON a.id = b.author_id \
    LEFT JOIN genres g ON g.id = b.genre_id";

/// One predicate per filter field; an absent field binds NULL and matches all rows.
///
/// Parameters: `$1` genre, `$2` author, `$3` status id, `$4` search pattern.
pub(crate) const FILTER_PREDICATES: &str = "\
    ($1::TEXT IS NULL OR g.name = $1) \
    AND ($2::TEXT IS NULL OR a.name = $2) \
    AND ($3::SMALLINT IS NULL OR b.status_id = $3) \
    AND ($4::TEXT IS NULL \
         OR b.title ILIKE $4 \
         OR a.name ILIKE $4 \
         OR g.name ILIKE $4)";

/// Bind the filter values in the order expected by [`FILTER_PREDICATES`].
pub(crate) fn filter_arguments(filter: &BookFilter) -> Result<PgArguments, sqlx::Error> {
    let mut args = PgArguments::default();
    args.add(filter.genre.as_deref())
        .map_err(sqlx::Error::Encode)?;
    args.add(filter.author.as_deref())
        .map_err(sqlx::Error::Encode)?;
    args.add(filter.status.map(|s| s.id()))
        .map_err(sqlx::Error::Encode)?;
    args.add(filter.search_pattern())
        .map_err(sqlx::Error::Encode)?;
    Ok(args)
}
