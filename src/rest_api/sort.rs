//! # Sort Stage
//!
//! Single-field ordering for listings.

use crate::catalog::{BookField, BookRecord};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Only the exact string `"asc"` is ascending; every other value is
    /// descending.
    pub fn from_param(value: &str) -> Self {
        if value == "asc" {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

/// Order-by clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Field name as requested; may not name a real field
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Reorder `books` in place.
    ///
    /// An unknown field compares every pair as equal, so the order is left
    /// as it was.
    pub fn apply(&self, books: &mut [BookRecord]) {
        let Some(field) = BookField::from_name(&self.field) else {
            return;
        };

        match self.direction {
            SortDirection::Ascending => books.sort_by(|a, b| a.compare_by(b, field)),
            SortDirection::Descending => books.sort_by(|a, b| b.compare_by(a, field)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_books;

    fn years(books: &[BookRecord]) -> Vec<i64> {
        books.iter().map(|b| b.year).collect()
    }

    #[test]
    fn test_year_ascending() {
        let mut books = seed_books();
        SortSpec::ascending("ano").apply(&mut books);
        assert_eq!(years(&books), vec![1899, 1943, 1949, 1954, 1997]);
    }

    #[test]
    fn test_year_descending() {
        let mut books = seed_books();
        SortSpec::descending("year").apply(&mut books);
        assert_eq!(years(&books), vec![1997, 1954, 1949, 1943, 1899]);
    }

    #[test]
    fn test_title_lexicographic() {
        let mut books = seed_books();
        SortSpec::ascending("title").apply(&mut books);
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "1984",
                "Dom Casmurro",
                "Harry Potter e a Pedra Filosofal",
                "O Pequeno Príncipe",
                "O Senhor dos Anéis",
            ]
        );
    }

    #[test]
    fn test_unknown_field_keeps_order() {
        let mut books = seed_books();
        SortSpec::descending("isbn").apply(&mut books);
        assert_eq!(books, seed_books());
    }

    #[test]
    fn test_adjacent_pairs_respect_direction() {
        for name in ["id", "title", "author", "year", "genre"] {
            let field = BookField::from_name(name).unwrap();

            let mut asc = seed_books();
            SortSpec::ascending(name).apply(&mut asc);
            assert!(asc
                .windows(2)
                .all(|w| w[0].compare_by(&w[1], field) != std::cmp::Ordering::Greater));

            let mut desc = seed_books();
            SortSpec::descending(name).apply(&mut desc);
            assert!(desc
                .windows(2)
                .all(|w| w[0].compare_by(&w[1], field) != std::cmp::Ordering::Less));
        }
    }

    #[test]
    fn test_direction_from_param() {
        assert_eq!(SortDirection::from_param("asc"), SortDirection::Ascending);
        assert_eq!(SortDirection::from_param("desc"), SortDirection::Descending);
        assert_eq!(SortDirection::from_param("Asc"), SortDirection::Descending);
        assert_eq!(SortDirection::from_param("random"), SortDirection::Descending);
    }
}
