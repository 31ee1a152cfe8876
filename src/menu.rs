use std::io::{self, Write};

use anyhow::Result;

use crate::collection::{BookCollection, CollectionError};
use crate::models::{Book, BookPatch, SearchField};

/// Run the numbered menu until the user exits or stdin closes.
pub fn run(collection: &mut BookCollection) -> Result<()> {
    loop {
        print_menu();
        let Some(choice) = prompt("Please choose an option (1-7): ")? else {
            break;
        };
        match choice.trim() {
            "1" => add_book(collection)?,
            "2" => remove_book(collection)?,
            "3" => search_books(collection)?,
            "4" => update_book(collection)?,
            "5" => list_books(collection),
            "6" => show_progress(collection),
            "7" => {
                collection.save()?;
                println!("Thank you for using Book Collection Manager. Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again.\n"),
        }
    }
    Ok(())
}

fn print_menu() {
    println!("Welcome to Your Book Collection Manager!");
    println!("1. Add a new book");
    println!("2. Remove a book");
    println!("3. Search for books");
    println!("4. Update book details");
    println!("5. View all books");
    println!("6. View reading progress");
    println!("7. Exit");
}

/// Print `msg` and read one line. `None` means stdin reached EOF.
fn prompt(msg: &str) -> Result<Option<String>> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

fn add_book(collection: &mut BookCollection) -> Result<()> {
    let Some(title) = prompt("Enter the book's title: ")? else { return Ok(()) };
    let Some(author) = prompt("Enter the author's name: ")? else { return Ok(()) };
    let Some(year) = prompt("Enter the publication year: ")? else { return Ok(()) };
    let year: i32 = year.trim().parse()?;
    let Some(genre) = prompt("Enter the genre of the book: ")? else { return Ok(()) };
    let read = matches!(
        prompt("Have you read the book? (yes/no): ")?,
        Some(answer) if answer.trim().eq_ignore_ascii_case("yes")
    );

    let book = Book { title, author, year, genre, read };
    let title = book.title.clone();
    collection.create(book)?;
    println!("Added {title} to the collection!\n");
    Ok(())
}

fn remove_book(collection: &mut BookCollection) -> Result<()> {
    let Some(title) = prompt("Enter the title of the book you want to delete: ")? else {
        return Ok(());
    };
    match collection.delete(title.trim()) {
        Ok(()) => println!("Deleted {} from the collection!\n", title.trim()),
        Err(CollectionError::NotFound { .. }) => println!("Book not found in the collection.\n"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn search_books(collection: &BookCollection) -> Result<()> {
    println!("Search by :");
    println!("1. Title");
    println!("2. Author");
    let Some(choice) = prompt("Enter your choice by number (1/2): ")? else { return Ok(()) };
    let field = match choice.trim() {
        "2" => SearchField::Author,
        _ => SearchField::Title,
    };
    let Some(query) = prompt("Enter the search terms: ")? else { return Ok(()) };
    let found = collection.find(query.trim(), field);
    if found.is_empty() {
        println!("No books found matching the search terms.\n");
    } else {
        println!("Matching Books:");
        for (index, book) in found.iter().enumerate() {
            println!("{}. {}", index + 1, book);
        }
        println!();
    }
    Ok(())
}

fn update_book(collection: &mut BookCollection) -> Result<()> {
    let Some(title) = prompt("Enter the title of the book you want to update: ")? else {
        return Ok(());
    };
    let title = title.trim().to_string();
    if collection.get(&title).is_none() {
        println!("Book not found in the collection.\n");
        return Ok(());
    }

    println!("Leave blank to keep existing value.");
    let patch = BookPatch {
        title: non_blank(prompt(&format!("Enter new title for {title}: "))?),
        author: non_blank(prompt(&format!("Enter new author for {title}: "))?),
        year: match non_blank(prompt(&format!("Enter new publication year for {title}: "))?) {
            Some(s) => Some(s.parse()?),
            None => None,
        },
        genre: non_blank(prompt(&format!("Enter new genre for {title}: "))?),
        read: non_blank(prompt(&format!("Have you read {title}? (yes/no): "))?)
            .map(|s| s.eq_ignore_ascii_case("yes")),
    };

    match collection.update(&title, &patch) {
        Ok(()) => println!("Updated {title} in the collection!\n"),
        Err(CollectionError::NotFound { .. }) => println!("Book not found in the collection.\n"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Blank or EOF input means "keep the existing value".
fn non_blank(input: Option<String>) -> Option<String> {
    input
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn list_books(collection: &BookCollection) {
    let books = collection.books();
    if books.is_empty() {
        println!("Your Books Collection is empty");
        return;
    }
    println!("Your Books Collection:");
    for (index, book) in books.iter().enumerate() {
        println!("{}. {}", index + 1, book);
    }
    println!();
}

fn show_progress(collection: &BookCollection) {
    println!("{}\n", collection.stats());
}
