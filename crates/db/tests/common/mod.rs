#![allow(dead_code)]

use bookshelf_db::models::author::Author;
use bookshelf_db::models::genre::Genre;
use sqlx::PgPool;

/// Author row with exactly `name`, read straight from the table.
pub async fn find_author(pool: &PgPool, name: &str) -> Option<Author> {
    sqlx::query_as::<_, Author>(
        "SELECT id, name, created_date, created_at, updated_at FROM authors WHERE name = $1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await
    .unwrap()
}

/// Genre row with exactly `name`, read straight from the table.
pub async fn find_genre(pool: &PgPool, name: &str) -> Option<Genre> {
    sqlx::query_as::<_, Genre>("SELECT id, name, created_at, updated_at FROM genres WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await
        .unwrap()
}
