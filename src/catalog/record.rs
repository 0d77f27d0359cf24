//! Book record and its sortable fields

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single book entry in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub genre: String,
}

impl BookRecord {
    /// Create a record with an already-assigned id
    pub fn new(
        id: u64,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
        }
    }

    /// Compare two records on a single field, ascending.
    ///
    /// Numeric fields compare numerically, text fields compare by UTF-8
    /// bytes (code point order, not UTF-16 code unit order).
    pub fn compare_by(&self, other: &Self, field: BookField) -> Ordering {
        match field {
            BookField::Id => self.id.cmp(&other.id),
            BookField::Title => self.title.cmp(&other.title),
            BookField::Author => self.author.cmp(&other.author),
            BookField::Year => self.year.cmp(&other.year),
            BookField::Genre => self.genre.cmp(&other.genre),
        }
    }
}

/// Fields a listing can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Id,
    Title,
    Author,
    Year,
    Genre,
}

impl BookField {
    /// Resolve a field from its query-string name.
    ///
    /// Both the English names and the Portuguese aliases (`titulo`, `autor`,
    /// `ano`, `genero`) are accepted. Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(BookField::Id),
            "title" | "titulo" => Some(BookField::Title),
            "author" | "autor" => Some(BookField::Author),
            "year" | "ano" => Some(BookField::Year),
            "genre" | "genero" => Some(BookField::Genre),
            _ => None,
        }
    }

    /// Canonical field name as serialized on the record
    pub fn as_str(&self) -> &'static str {
        match self {
            BookField::Id => "id",
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Year => "year",
            BookField::Genre => "genre",
        }
    }
}
