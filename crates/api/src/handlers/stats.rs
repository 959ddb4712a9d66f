//! Handler for reading-status statistics.

use axum::extract::{Query, State};
use axum::Json;
use bookshelf_db::models::stats::LibraryStats;
use bookshelf_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::query::BookFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/stats
///
/// Total and per-status breakdown for the filtered book set. All three
/// statuses are always present, in the order Leído, Pendiente, Leyendo.
pub async fn get_stats(
    State(state): State<AppState>,
    Query(params): Query<BookFilterParams>,
) -> AppResult<Json<DataResponse<LibraryStats>>> {
    let filter = params.into_filter()?;
    let stats = StatsRepo::aggregate(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: stats }))
}
