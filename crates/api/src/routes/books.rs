//! Route definitions for the `/books` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Routes mounted at `/books`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /pending       -> list_pending
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// POST   /{id}/reads    -> record_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(books::list).post(books::create))
        .route("/pending", get(books::list_pending))
        .route(
            "/{id}",
            get(books::get_by_id)
                .put(books::update)
                .delete(books::delete),
        )
        .route("/{id}/reads", post(books::record_read))
}
