//! ex1: row-at-a-time inserts versus one bulk insert.
//!
//! Rows are generated up front, so callers sharing a generator only need it
//! while generating, not while the inserts run.

use tracing::debug;

use crate::factory::{DataGenerator, MAX_TEXT_CHARS};
use crate::store::{Author, AuthorId, BookStore, NewBook, StoreError, StoreResult};

/// The author every created book belongs to
pub fn first_author(store: &BookStore) -> StoreResult<Author> {
    store.first_author()?.ok_or(StoreError::NoAuthors)
}

/// `count` new books for `author`, publisher left empty
pub fn generate_books(generator: &mut DataGenerator, author: AuthorId, count: usize) -> Vec<NewBook> {
    (0..count)
        .map(|_| NewBook {
            title: generator.text(MAX_TEXT_CHARS),
            isbn: generator.isbn10(),
            author,
            publisher: String::new(),
        })
        .collect()
}

/// One insert per row
pub fn insert_one_by_one(store: &BookStore, rows: Vec<NewBook>) -> StoreResult<usize> {
    let count = rows.len();
    for row in rows {
        store.insert_book(row)?;
    }

    debug!(count, "books created one by one");
    Ok(count)
}

/// One bulk insert for all rows
pub fn insert_in_bulk(store: &BookStore, rows: Vec<NewBook>) -> StoreResult<usize> {
    let written = store.bulk_insert_books(rows)?.len();

    debug!(count = written, "books created in bulk");
    Ok(written)
}

/// Create `count` books for the first author, one insert each
pub fn create_one_by_one(
    store: &BookStore,
    generator: &mut DataGenerator,
    count: usize,
) -> StoreResult<usize> {
    let author = first_author(store)?;
    insert_one_by_one(store, generate_books(generator, author.id, count))
}

/// Create `count` books for the first author in one bulk insert
pub fn create_in_bulk(
    store: &BookStore,
    generator: &mut DataGenerator,
    count: usize,
) -> StoreResult<usize> {
    let author = first_author(store)?;
    insert_in_bulk(store, generate_books(generator, author.id, count))
}
