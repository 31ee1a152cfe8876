use crate::collection::CollectionError;
use crate::models::Book;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub const DB_FILE: &str = "books_data.json";

/// Load the persisted collection. A missing or unreadable file is not an
/// error: the collection starts empty.
pub fn load_from(path: &Path) -> Vec<Book> {
    if !path.exists() {
        debug!(path = %path.display(), "store file missing, starting empty");
        return Vec::new();
    }
    let s = fs::read_to_string(path).unwrap_or_default();
    match serde_json::from_str(&s) {
        Ok(books) => books,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "store file unreadable, starting empty");
            Vec::new()
        }
    }
}

/// Overwrite the persisted collection with the full sequence. I/O and
/// serialization failures propagate.
pub fn save_to(path: &Path, books: &[Book]) -> Result<(), CollectionError> {
    let s = serde_json::to_string_pretty(books)?;
    fs::write(path, s)?;
    Ok(())
}
