//! Nested response shapes.
//!
//! Plain records serialize themselves (see [`crate::store`]); these add the
//! nested relations each lesson exposes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::{Author, AuthorId, Book, BookId, BookRow, Country, CountryId};

/// Author with the country embedded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorWithCountry {
    pub id: AuthorId,
    pub name: String,
    pub country: Country,
}

impl AuthorWithCountry {
    pub fn new(author: Author, country: Country) -> Self {
        Self {
            id: author.id,
            name: author.name,
            country,
        }
    }
}

/// Book with the author (and their country) embedded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookWithAuthor {
    pub id: BookId,
    pub title: String,
    pub isbn: String,
    pub author: AuthorWithCountry,
    pub date_published: DateTime<Utc>,
    pub publisher: String,
}

impl BookWithAuthor {
    pub fn new(book: Book, author: AuthorWithCountry) -> Self {
        Self {
            id: book.id,
            title: book.title,
            isbn: book.isbn,
            author,
            date_published: book.date_published,
            publisher: book.publisher,
        }
    }
}

impl From<BookRow> for BookWithAuthor {
    fn from(row: BookRow) -> Self {
        Self::new(row.book, AuthorWithCountry::new(row.author, row.country))
    }
}

/// Author with every book they wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorWithBooks {
    pub id: AuthorId,
    pub name: String,
    pub country: CountryId,
    pub books: Vec<Book>,
}

impl AuthorWithBooks {
    pub fn new(author: Author, books: Vec<Book>) -> Self {
        Self {
            id: author.id,
            name: author.name,
            country: author.country,
            books,
        }
    }
}

/// Author with their most recently published book, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorWithLastBook {
    pub id: AuthorId,
    pub name: String,
    pub country: CountryId,
    pub last_book: Option<Book>,
}

impl AuthorWithLastBook {
    pub fn new(author: Author, last_book: Option<Book>) -> Self {
        Self {
            id: author.id,
            name: author.name,
            country: author.country,
            last_book,
        }
    }
}
