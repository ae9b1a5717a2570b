//! # Bookstore Store
//!
//! An in-memory relational store for the Country, Author and Book tables.
//!
//! Every public read or write is one round trip ("query"): it bumps a
//! shared counter and, when configured, sleeps for a fixed latency. That
//! makes access patterns visible in both query counts and response times:
//! a lazy relation walk costs one round trip per row, a batched prefetch or
//! a join costs one in total.
//!
//! Writes to the Book table notify every registered [`BookWriteHook`] after
//! the rows are committed.

mod book_store;
mod errors;
mod models;

pub use book_store::{BookStore, BookWriteHook, StoreConfig};
pub use errors::{StoreError, StoreResult};
pub use models::{
    Author, AuthorId, Book, BookId, BookOrder, BookRow, Country, CountryId, NewAuthor, NewBook,
    NewCountry,
};
