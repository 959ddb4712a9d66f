//! Row structs and DTOs for the `authors`, `genres` and `books` tables.

pub mod author;
pub mod book;
pub mod genre;
pub mod stats;
