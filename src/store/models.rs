//! Bookstore records
//!
//! Serialized field order matches the table column order, with foreign
//! keys rendered as plain ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type CountryId = u64;
pub type AuthorId = u64;
pub type BookId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    pub continent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub country: CountryId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub isbn: String,
    pub author: AuthorId,
    /// Set by the store at insert time
    pub date_published: DateTime<Utc>,
    pub publisher: String,
}

/// A book together with its author and the author's country, fetched in
/// one round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub book: Book,
    pub author: Author,
    pub country: Country,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCountry {
    pub name: String,
    pub continent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub country: CountryId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub isbn: String,
    pub author: AuthorId,
    pub publisher: String,
}

/// Row ordering for book listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookOrder {
    /// Ascending primary key
    #[default]
    Id,
    /// Newest id first
    IdDesc,
    /// Most recently published first, ties broken by newest id
    DatePublishedDesc,
}

impl BookOrder {
    /// Sort a slice of books in place.
    pub fn sort(self, books: &mut [Book]) {
        match self {
            BookOrder::Id => books.sort_by_key(|b| b.id),
            BookOrder::IdDesc => books.sort_by(|a, b| b.id.cmp(&a.id)),
            BookOrder::DatePublishedDesc => books.sort_by(|a, b| {
                (b.date_published, b.id).cmp(&(a.date_published, a.id))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn book(id: BookId, offset_secs: i64) -> Book {
        Book {
            id,
            title: format!("Title {}", id),
            isbn: "0-000-00000-0".to_string(),
            author: 1,
            date_published: Utc.timestamp_opt(offset_secs, 0).unwrap(),
            publisher: "Press".to_string(),
        }
    }

    #[test]
    fn test_sort_by_date_desc_breaks_ties_by_id() {
        let mut books = vec![book(1, 10), book(2, 30), book(3, 30), book(4, 20)];
        BookOrder::DatePublishedDesc.sort(&mut books);
        let ids: Vec<_> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_sort_by_id_desc() {
        let mut books = vec![book(2, 0), book(9, 0), book(5, 0)];
        BookOrder::IdDesc.sort(&mut books);
        let ids: Vec<_> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![9, 5, 2]);
    }

    #[test]
    fn test_book_field_order() {
        let json = serde_json::to_string(&book(7, 0)).unwrap();
        let id = json.find("\"id\"").unwrap();
        let author = json.find("\"author\"").unwrap();
        let publisher = json.find("\"publisher\"").unwrap();
        assert!(id < author && author < publisher);
    }
}
