//! # Book Repository
//!
//! The store owns every record. Readers get a cloned snapshot under a read
//! guard; the only write path (`insert`) takes the write guard, so writes are
//! serialized against concurrent reads.

use std::sync::RwLock;

use thiserror::Error;

use super::record::BookRecord;
use super::seed::seed_books;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A writer panicked while holding the lock
    #[error("Book store lock poisoned")]
    LockPoisoned,

    /// Insert attempted with an id already in the store
    #[error("Duplicate book id: {0}")]
    DuplicateId(u64),
}

/// Access to the book catalog
pub trait BookRepository: Send + Sync {
    /// Snapshot of every record, in store order
    fn list_all(&self) -> RepositoryResult<Vec<BookRecord>>;

    /// First record whose id equals `id`
    fn find_by_id(&self, id: u64) -> RepositoryResult<Option<BookRecord>>;

    /// Id the next inserted record will receive
    fn next_id(&self) -> RepositoryResult<u64>;

    /// Append a record.
    ///
    /// A record with `id == 0` is assigned `next_id()`; any other id must not
    /// already be present.
    fn insert(&self, record: BookRecord) -> RepositoryResult<BookRecord>;
}

/// max existing id + 1, or 1 for an empty slice
pub fn next_id_for(records: &[BookRecord]) -> u64 {
    records.iter().map(|b| b.id).max().map_or(1, |max| max + 1)
}

/// In-memory repository backed by an ordered vector
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    records: RwLock<Vec<BookRecord>>,
}

impl InMemoryBookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the seed catalog
    pub fn seeded() -> Self {
        Self::with_records(seed_books())
    }

    /// Create a store holding the given records, in order
    pub fn with_records(records: Vec<BookRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl BookRepository for InMemoryBookStore {
    fn list_all(&self) -> RepositoryResult<Vec<BookRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.clone())
    }

    fn find_by_id(&self, id: u64) -> RepositoryResult<Option<BookRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.iter().find(|b| b.id == id).cloned())
    }

    fn next_id(&self) -> RepositoryResult<u64> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(next_id_for(&records))
    }

    fn insert(&self, mut record: BookRecord) -> RepositoryResult<BookRecord> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        if record.id == 0 {
            record.id = next_id_for(&records);
        } else if records.iter().any(|b| b.id == record.id) {
            return Err(RepositoryError::DuplicateId(record.id));
        }

        records.push(record.clone());
        Ok(record)
    }
}
