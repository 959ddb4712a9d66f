//! Handlers for library-wide views: the overview, genres and authors.

use axum::extract::{Query, State};
use axum::Json;
use bookshelf_db::catalog;
use bookshelf_db::models::author::Author;
use bookshelf_db::models::book::LibraryOverview;
use bookshelf_db::models::genre::Genre;
use bookshelf_db::repositories::{AuthorRepo, GenreRepo};

use crate::error::AppResult;
use crate::query::BookFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/library
///
/// Filtered books, the pending list, genres in use and the library total.
pub async fn overview(
    State(state): State<AppState>,
    Query(params): Query<BookFilterParams>,
) -> AppResult<Json<DataResponse<LibraryOverview>>> {
    let filter = params.into_filter()?;
    let overview = catalog::library_overview(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: overview }))
}

/// GET /api/v1/genres
///
/// Only genres referenced by at least one book.
pub async fn list_genres(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Genre>>>> {
    let genres = GenreRepo::list_in_use(&state.pool).await?;
    Ok(Json(DataResponse { data: genres }))
}

/// GET /api/v1/authors
pub async fn list_authors(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Author>>>> {
    let authors = AuthorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: authors }))
}
