use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{ValidationResult, require_text};

/// A catalogued book.
///
/// Identity is the ISBN: two records with the same ISBN are the same book,
/// whatever their title or author say.
#[derive(Debug, Clone)]
pub struct BookRecord {
    title: String,
    author: String,
    isbn: String,
}

impl BookRecord {
    /// Builds a record from raw input, trimming every field.
    ///
    /// Fails with [`crate::error::ValidationError::EmptyField`] when any field
    /// is empty or blank.
    pub fn new(title: &str, author: &str, isbn: &str) -> ValidationResult<Self> {
        Ok(Self {
            title: require_text("title", title)?,
            author: require_text("author", author)?,
            isbn: require_text("isbn", isbn)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }
}

impl PartialEq for BookRecord {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for BookRecord {}

impl Hash for BookRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book[title='{}', author='{}', isbn='{}']",
            self.title, self.author, self.isbn
        )
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
