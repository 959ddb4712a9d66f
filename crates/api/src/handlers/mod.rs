//! Request handlers.
//!
//! Handlers parse parameters, call into `bookshelf_db` and map errors via
//! [`AppError`](crate::error::AppError). No SQL lives here.

pub mod books;
pub mod library;
pub mod stats;
