//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept a pool (reads) or any Postgres executor (write path) as the
//! first argument.

mod book_filter;

pub mod author_repo;
pub mod book_repo;
pub mod genre_repo;
pub mod stats_repo;

pub use author_repo::AuthorRepo;
pub use book_repo::BookRepo;
pub use genre_repo::GenreRepo;
pub use stats_repo::StatsRepo;
