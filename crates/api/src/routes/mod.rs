pub mod books;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /books                   list (filtered), create
/// /books/pending           pending books
/// /books/{id}              get, update, delete
/// /books/{id}/reads        record a read (POST)
///
/// /genres                  genres in use
/// /authors                 all authors
/// /stats                   status breakdown (filtered)
/// /library                 overview (filtered)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/books", books::router())
        .route("/genres", get(handlers::library::list_genres))
        .route("/authors", get(handlers::library::list_authors))
        .route("/stats", get(handlers::stats::get_stats))
        .route("/library", get(handlers::library::overview))
}
