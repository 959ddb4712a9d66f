//! Statistics aggregation over the `books` table.

use bookshelf_core::filter::BookFilter;
use bookshelf_core::reading_status::ReadingStatus;
use bookshelf_core::stats::status_breakdown;
use sqlx::{PgExecutor, PgPool};

use crate::models::stats::LibraryStats;
use crate::repositories::book_filter::{filter_arguments, BOOK_JOINS, FILTER_PREDICATES};

/// Provides filtered counts and the per-status breakdown.
pub struct StatsRepo;

impl StatsRepo {
    /// Number of books matching `filter`.
    pub async fn count_filtered<'e, E>(
        executor: E,
        filter: &BookFilter,
    ) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT COUNT(*) {BOOK_JOINS} WHERE {FILTER_PREDICATES}");
        sqlx::query_scalar_with::<_, i64, _>(&query, filter_arguments(filter)?)
            .fetch_one(executor)
            .await
    }

    /// Per-status counts for books matching `filter`.
    ///
    /// Statuses with no matching books are absent from the result.
    pub async fn count_by_status<'e, E>(
        executor: E,
        filter: &BookFilter,
    ) -> Result<Vec<(ReadingStatus, i64)>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT b.status_id, COUNT(*) {BOOK_JOINS} \
             WHERE {FILTER_PREDICATES} \
             GROUP BY b.status_id \
             ORDER BY b.status_id"
        );
        let rows = sqlx::query_as_with::<_, (i16, i64), _>(&query, filter_arguments(filter)?)
            .fetch_all(executor)
            .await?;

        rows.into_iter()
            .map(|(status_id, count)| {
                ReadingStatus::try_from(status_id)
                    .map(|status| (status, count))
                    .map_err(|e| sqlx::Error::Decode(Box::new(e)))
            })
            .collect()
    }

    /// Total and per-status breakdown for `filter`.
    ///
    /// Both counts are read from one snapshot so the per-status counts
    /// always add up to the total.
    pub async fn aggregate(
        pool: &PgPool,
        filter: &BookFilter,
    ) -> Result<LibraryStats, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let total = Self::count_filtered(&mut *tx, filter).await?;
        let grouped = Self::count_by_status(&mut *tx, filter).await?;
        tx.commit().await?;

        Ok(LibraryStats {
            total,
            by_status: status_breakdown(total, &grouped),
            applied_filter: filter.clone(),
        })
    }
}
