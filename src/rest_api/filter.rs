//! # Filter Criteria
//!
//! Predicates a listing narrows the catalog with. A `FilterSet` combines
//! criteria with AND; an empty set keeps every record.

use crate::catalog::BookRecord;

/// A single filter condition
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Case-insensitive substring of the title (needle stored lowercased)
    TitleContains(String),

    /// Case-insensitive substring of the author
    AuthorContains(String),

    /// Case-insensitive substring of the genre
    GenreContains(String),

    /// `year >= bound`. A NaN bound matches nothing.
    YearAtLeast(f64),

    /// `year <= bound`. A NaN bound matches nothing.
    YearAtMost(f64),
}

impl Criterion {
    pub fn title_contains(needle: &str) -> Self {
        Criterion::TitleContains(needle.to_lowercase())
    }

    pub fn author_contains(needle: &str) -> Self {
        Criterion::AuthorContains(needle.to_lowercase())
    }

    pub fn genre_contains(needle: &str) -> Self {
        Criterion::GenreContains(needle.to_lowercase())
    }

    /// Check if a record satisfies this criterion
    pub fn matches(&self, book: &BookRecord) -> bool {
        match self {
            Criterion::TitleContains(needle) => contains_ignore_case(&book.title, needle),
            Criterion::AuthorContains(needle) => contains_ignore_case(&book.author, needle),
            Criterion::GenreContains(needle) => contains_ignore_case(&book.genre, needle),
            Criterion::YearAtLeast(bound) => (book.year as f64) >= *bound,
            Criterion::YearAtMost(bound) => (book.year as f64) <= *bound,
        }
    }
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// A set of criteria combined with AND logic
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    criteria: Vec<Criterion>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Check if a record matches all criteria
    pub fn matches(&self, book: &BookRecord) -> bool {
        self.criteria.iter().all(|c| c.matches(book))
    }

    /// Matching records, in input order
    pub fn apply(&self, books: &[BookRecord]) -> Vec<BookRecord> {
        books.iter().filter(|b| self.matches(b)).cloned().collect()
    }
}
