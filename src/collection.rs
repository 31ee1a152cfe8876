use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::models::{Book, BookPatch, ReadingStats, SearchField};
use crate::storage;

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("book not found in the collection: {title}")]
    NotFound { title: String },
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// The collection store: an ordered sequence of books mirrored to a JSON
/// file. Every mutation persists the full sequence before returning.
pub struct BookCollection {
    books: Vec<Book>,
    path: PathBuf,
}

impl BookCollection {
    /// Open the collection backed by `path`, loading whatever is persisted
    /// there. A missing or corrupt file yields an empty collection.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let books = storage::load_from(&path);
        debug!(count = books.len(), "collection loaded");
        BookCollection { books, path }
    }

    /// Open the collection at its fixed file name in the working directory.
    pub fn open_default() -> Self {
        Self::open(storage::DB_FILE)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn save(&self) -> Result<(), CollectionError> {
        storage::save_to(&self.path, &self.books)?;
        debug!(count = self.books.len(), "collection persisted");
        Ok(())
    }

    pub fn create(&mut self, book: Book) -> Result<(), CollectionError> {
        self.books.push(book);
        self.save()
    }

    /// First book whose title matches `title` case-insensitively.
    pub fn get(&self, title: &str) -> Option<&Book> {
        let needle = title.to_lowercase();
        self.books.iter().find(|b| b.title.to_lowercase() == needle)
    }

    /// Remove the first case-insensitive title match. The sequence is left
    /// untouched (and nothing is persisted) when no book matches.
    pub fn delete(&mut self, title: &str) -> Result<(), CollectionError> {
        let needle = title.to_lowercase();
        match self.books.iter().position(|b| b.title.to_lowercase() == needle) {
            Some(i) => {
                self.books.remove(i);
                self.save()
            }
            None => Err(CollectionError::NotFound { title: title.to_string() }),
        }
    }

    /// All books whose title or author contains `query` as a
    /// case-insensitive substring. The selected field records what the
    /// user asked for; the match spans both fields.
    pub fn find(&self, query: &str, field: SearchField) -> Vec<&Book> {
        let needle = query.to_lowercase();
        debug!(%field, query = %needle, "searching collection");
        self.books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&needle)
                    || b.author.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Overwrite the supplied fields of the first case-insensitive title
    /// match; `None` fields keep their prior value.
    pub fn update(&mut self, title: &str, patch: &BookPatch) -> Result<(), CollectionError> {
        let needle = title.to_lowercase();
        match self.books.iter_mut().find(|b| b.title.to_lowercase() == needle) {
            Some(book) => patch.apply(book),
            None => return Err(CollectionError::NotFound { title: title.to_string() }),
        }
        self.save()
    }

    pub fn stats(&self) -> ReadingStats {
        let total = self.books.len();
        let read = self.books.iter().filter(|b| b.read).count();
        let percent_read = if total > 0 {
            read as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        ReadingStats { total, percent_read }
    }
}
