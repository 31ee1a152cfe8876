use serde::{Serialize, Deserialize};
use std::fmt;

/// One book entry as stored on disk: a JSON object with exactly these keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

impl Book {
    pub fn reading_status(&self) -> &'static str {
        if self.read { "Read" } else { "Unread" }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}) - {} - {}",
            self.title, self.author, self.year, self.genre,
            self.reading_status()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    pub fn name(&self) -> &'static str {
        match self {
            SearchField::Title => "Title",
            SearchField::Author => "Author",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Partial update for a book. `None` keeps the prior value.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub read: Option<bool>,
}

impl BookPatch {
    pub fn apply(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(year) = self.year {
            book.year = year;
        }
        if let Some(genre) = &self.genre {
            book.genre = genre.clone();
        }
        if let Some(read) = self.read {
            book.read = read;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingStats {
    pub total: usize,
    pub percent_read: f64,
}

impl fmt::Display for ReadingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Books in Collection: {}", self.total)?;
        write!(f, "Books Read: {:.2}%", self.percent_read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            year: 1965,
            genre: "Sci-Fi".to_string(),
            read: false,
        }
    }

    #[test]
    fn display_line_for_unread_book() {
        assert_eq!(dune().to_string(), "Dune by Herbert (1965) - Sci-Fi - Unread");
    }

    #[test]
    fn display_line_for_read_book() {
        let mut book = dune();
        book.read = true;
        assert_eq!(book.to_string(), "Dune by Herbert (1965) - Sci-Fi - Read");
    }

    #[test]
    fn empty_patch_keeps_every_field() {
        let mut book = dune();
        BookPatch::default().apply(&mut book);
        assert_eq!(book, dune());
    }

    #[test]
    fn stats_display_for_single_unread_book() {
        let stats = ReadingStats { total: 1, percent_read: 0.0 };
        assert_eq!(
            stats.to_string(),
            "Total Books in Collection: 1\nBooks Read: 0.00%"
        );
    }

    #[test]
    fn stats_display_rounds_percentage_to_two_places() {
        let stats = ReadingStats { total: 3, percent_read: 100.0 / 3.0 };
        assert_eq!(
            stats.to_string(),
            "Total Books in Collection: 3\nBooks Read: 33.33%"
        );
    }

    #[test]
    fn patch_overwrites_only_supplied_fields() {
        let mut book = dune();
        let patch = BookPatch {
            year: Some(1966),
            read: Some(true),
            ..BookPatch::default()
        };
        patch.apply(&mut book);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.genre, "Sci-Fi");
        assert_eq!(book.year, 1966);
        assert!(book.read);
    }
}
