//! Statistics response model.

use bookshelf_core::filter::BookFilter;
use bookshelf_core::stats::StatusCount;
use serde::Serialize;

/// Status breakdown over a filtered book set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    pub total: i64,
    /// Always three entries: Leído, Pendiente, Leyendo.
    pub by_status: Vec<StatusCount>,
    pub applied_filter: BookFilter,
}
