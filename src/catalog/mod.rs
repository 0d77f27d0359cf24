//! # Book Catalog
//!
//! The record store: book records, the repository interface the HTTP layer
//! reads through, and the seed set the process boots with.

mod record;
mod seed;
mod store;

pub use record::{BookField, BookRecord};
pub use seed::seed_books;
pub use store::{next_id_for, BookRepository, InMemoryBookStore, RepositoryError, RepositoryResult};
