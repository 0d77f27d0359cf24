//! # Books Handler
//!
//! Runs the listing pipeline (filter, sort, paginate) and id lookups against
//! an injected repository.

use std::sync::Arc;

use crate::catalog::{BookRecord, BookRepository};

use super::errors::{RestError, RestResult};
use super::parser::{coerce_number, ListQuery};
use super::response::ListResponse;

/// Handler trait for the books endpoints
pub trait BookHandler: Send + Sync {
    /// One page of books matching `query`
    fn list(&self, query: &ListQuery) -> RestResult<ListResponse<BookRecord>>;

    /// A single book by its raw (uncoerced) identifier
    fn get(&self, id: &str) -> RestResult<BookRecord>;
}

/// Handler backed by a `BookRepository`
pub struct CatalogHandler<R: BookRepository> {
    repo: Arc<R>,
}

impl<R: BookRepository> CatalogHandler<R> {
    pub fn new(repo: R) -> Self {
        Self::from_shared(Arc::new(repo))
    }

    pub fn from_shared(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}

impl<R: BookRepository> BookHandler for CatalogHandler<R> {
    fn list(&self, query: &ListQuery) -> RestResult<ListResponse<BookRecord>> {
        let snapshot = self.repo.list_all()?;

        let mut books = query.filters.apply(&snapshot);
        if let Some(sort) = &query.sort {
            sort.apply(&mut books);
        }

        Ok(query.page.paginate(&books))
    }

    fn get(&self, id: &str) -> RestResult<BookRecord> {
        let found = match parse_id(id) {
            Some(id) => self.repo.find_by_id(id)?,
            None => None,
        };

        found.ok_or_else(|| RestError::BookNotFound(id.to_string()))
    }
}

/// Coerce a path identifier; only non-negative whole numbers can name a book
fn parse_id(raw: &str) -> Option<u64> {
    let n = coerce_number(raw);
    if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64 {
        Some(n as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryBookStore, RepositoryError, RepositoryResult};
    use crate::rest_api::filter::{Criterion, FilterSet};
    use crate::rest_api::pagination::PageRequest;
    use crate::rest_api::sort::SortSpec;

    fn handler() -> CatalogHandler<InMemoryBookStore> {
        CatalogHandler::new(InMemoryBookStore::seeded())
    }

    fn ids(page: &ListResponse<BookRecord>) -> Vec<u64> {
        page.data.iter().map(|b| b.id).collect()
    }

    /// Repository whose lock is always poisoned
    struct PoisonedStore;

    impl BookRepository for PoisonedStore {
        fn list_all(&self) -> RepositoryResult<Vec<BookRecord>> {
            Err(RepositoryError::LockPoisoned)
        }

        fn find_by_id(&self, _id: u64) -> RepositoryResult<Option<BookRecord>> {
            Err(RepositoryError::LockPoisoned)
        }

        fn next_id(&self) -> RepositoryResult<u64> {
            Err(RepositoryError::LockPoisoned)
        }

        fn insert(&self, _record: BookRecord) -> RepositoryResult<BookRecord> {
            Err(RepositoryError::LockPoisoned)
        }
    }

    #[test]
    fn test_list_defaults() {
        let page = handler().list(&ListQuery::default()).unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 5);
        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_then_sort_then_paginate() {
        let query = ListQuery {
            filters: FilterSet::new().and(Criterion::YearAtLeast(1940.0)),
            sort: Some(SortSpec::descending("year")),
            page: PageRequest::new(2, 2),
        };
        let page = handler().list(&query).unwrap();
        assert_eq!(page.total, 4);
        assert_eq!(ids(&page), vec![2, 4]);
    }

    #[test]
    fn test_list_does_not_mutate_store() {
        let handler = handler();
        let query = ListQuery {
            sort: Some(SortSpec::descending("id")),
            ..Default::default()
        };
        handler.list(&query).unwrap();

        let again = handler.list(&ListQuery::default()).unwrap();
        assert_eq!(ids(&again), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_get_found() {
        let book = handler().get("3").unwrap();
        assert_eq!(book.title, "Dom Casmurro");
    }

    #[test]
    fn test_get_coerces_identifier() {
        assert_eq!(handler().get(" 3 ").unwrap().id, 3);
        assert_eq!(handler().get("3.0").unwrap().id, 3);
        assert_eq!(handler().get("0x3").unwrap().id, 3);
    }

    #[test]
    fn test_get_missing() {
        for id in ["999", "abc", "2.5", "-1", ""] {
            let err = handler().get(id).unwrap_err();
            assert!(matches!(err, RestError::BookNotFound(ref raw) if raw == id));
        }
    }

    #[test]
    fn test_repository_failure_surfaces() {
        let handler = CatalogHandler::new(PoisonedStore);
        assert!(matches!(
            handler.list(&ListQuery::default()),
            Err(RestError::Repository(RepositoryError::LockPoisoned))
        ));
        assert!(matches!(
            handler.get("1"),
            Err(RestError::Repository(RepositoryError::LockPoisoned))
        ));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("5"), Some(5));
        assert_eq!(parse_id("1e2"), Some(100));
        assert_eq!(parse_id("Infinity"), None);
        assert_eq!(parse_id("x"), None);
    }
}
