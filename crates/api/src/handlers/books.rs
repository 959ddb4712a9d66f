//! Handlers for the `/books` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use bookshelf_core::book::BookInput;
use bookshelf_core::types::DbId;
use bookshelf_db::catalog;
use bookshelf_db::models::book::BookRecord;
use bookshelf_db::repositories::BookRepo;

use crate::error::AppResult;
use crate::query::BookFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/books
///
/// Books matching the optional genre/status/author/search filter, by id.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<BookFilterParams>,
) -> AppResult<Json<DataResponse<Vec<BookRecord>>>> {
    let filter = params.into_filter()?;
    let books = BookRepo::list_records(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: books }))
}

/// GET /api/v1/books/pending
pub async fn list_pending(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<BookRecord>>>> {
    let books = BookRepo::list_pending(&state.pool).await?;
    Ok(Json(DataResponse { data: books }))
}

/// GET /api/v1/books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BookRecord>>> {
    let book = catalog::get_book(&state.pool, id).await?;
    Ok(Json(DataResponse { data: book }))
}

/// POST /api/v1/books
///
/// Resolves (or creates) the author and genre, then inserts the book.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<BookInput>,
) -> AppResult<(StatusCode, Json<DataResponse<BookRecord>>)> {
    let draft = input.into_draft()?;
    let book = catalog::create_book(&state.pool, &draft).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: book })))
}

/// PUT /api/v1/books/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<BookInput>,
) -> AppResult<Json<DataResponse<BookRecord>>> {
    let draft = input.into_draft()?;
    let book = catalog::update_book(&state.pool, id, &draft).await?;
    Ok(Json(DataResponse { data: book }))
}

/// DELETE /api/v1/books/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    catalog::delete_book(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/books/{id}/reads
///
/// Count one more read of the book and mark it as read.
pub async fn record_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BookRecord>>> {
    let book = catalog::record_read(&state.pool, id).await?;
    Ok(Json(DataResponse { data: book }))
}
