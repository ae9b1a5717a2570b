//! ex1: filtering in process versus filtering in the store.

use crate::store::{Book, BookStore, StoreResult};

/// Titles the filter keeps
pub const TITLE_PREFIX: &str = "A";

/// Load every book, then keep matching titles in Rust
pub fn filter_in_process(store: &BookStore) -> StoreResult<Vec<Book>> {
    let mut filtered = Vec::new();
    for book in store.all_books()? {
        if book.title.starts_with(TITLE_PREFIX) {
            filtered.push(book);
        }
    }
    Ok(filtered)
}

/// Let the store do the filtering and ship only matches
pub fn filter_in_store(store: &BookStore) -> StoreResult<Vec<Book>> {
    store.books_title_starts_with(TITLE_PREFIX)
}
