//! Domain types and pure logic for the bookshelf service.
//!
//! Nothing in this crate touches the database or the network: the store and
//! HTTP layers depend on it, never the other way round.

pub mod book;
pub mod error;
pub mod filter;
pub mod naming;
pub mod reading_status;
pub mod stats;
pub mod types;
