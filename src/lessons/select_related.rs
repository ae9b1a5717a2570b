//! ex3: books with their author and country, lazily versus joined.

use crate::store::{BookOrder, BookStore, StoreResult};

use super::serializers::{AuthorWithCountry, BookWithAuthor};

/// One query for the books, then an author and a country lookup per book
pub fn books_with_authors_lazy(store: &BookStore, limit: usize) -> StoreResult<Vec<BookWithAuthor>> {
    store
        .books(BookOrder::Id, Some(limit))?
        .into_iter()
        .map(|book| -> StoreResult<BookWithAuthor> {
            let author = store.author(book.author)?;
            let country = store.country(author.country)?;
            Ok(BookWithAuthor::new(book, AuthorWithCountry::new(author, country)))
        })
        .collect()
}

/// Everything in one joined query
pub fn books_with_authors_joined(
    store: &BookStore,
    limit: usize,
) -> StoreResult<Vec<BookWithAuthor>> {
    Ok(store
        .books_joined(BookOrder::Id, Some(limit))?
        .into_iter()
        .map(BookWithAuthor::from)
        .collect())
}
