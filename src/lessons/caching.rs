//! ex5: the most recent books, meant to be served through the page cache.

use crate::store::{BookOrder, BookStore, StoreResult};

use super::serializers::BookWithAuthor;

/// Cache key prefix for the recent-books page
pub const CACHE_KEY_PREFIX: &str = "books";

/// The `limit` newest books with author and country, in one query
pub fn latest_books(store: &BookStore, limit: usize) -> StoreResult<Vec<BookWithAuthor>> {
    Ok(store
        .books_joined(BookOrder::IdDesc, Some(limit))?
        .into_iter()
        .map(BookWithAuthor::from)
        .collect())
}
