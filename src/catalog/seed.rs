//! Seed catalog loaded at boot

use super::record::BookRecord;

/// The fixed set of books every process starts with, in store order
pub fn seed_books() -> Vec<BookRecord> {
    vec![
        BookRecord::new(1, "O Senhor dos Anéis", "J.R.R. Tolkien", 1954, "Fantasia"),
        BookRecord::new(2, "1984", "George Orwell", 1949, "Distopia"),
        BookRecord::new(3, "Dom Casmurro", "Machado de Assis", 1899, "Romance"),
        BookRecord::new(4, "O Pequeno Príncipe", "Antoine de Saint-Exupéry", 1943, "Infantil"),
        BookRecord::new(5, "Harry Potter e a Pedra Filosofal", "J.K. Rowling", 1997, "Fantasia"),
    ]
}
