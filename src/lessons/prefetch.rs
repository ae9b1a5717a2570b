//! ex2: authors with all their books, lazily versus prefetched.

use crate::store::{AuthorId, BookOrder, BookStore, StoreResult};

use super::serializers::AuthorWithBooks;

/// One query for the authors, then one more per author (N+1)
pub fn authors_with_books_lazy(store: &BookStore) -> StoreResult<Vec<AuthorWithBooks>> {
    store
        .all_authors()?
        .into_iter()
        .map(|author| -> StoreResult<AuthorWithBooks> {
            let books = store.books_by_author(author.id)?;
            Ok(AuthorWithBooks::new(author, books))
        })
        .collect()
}

/// One query for the authors and one batched query for all their books
pub fn authors_with_books_prefetched(store: &BookStore) -> StoreResult<Vec<AuthorWithBooks>> {
    let authors = store.all_authors()?;
    let ids: Vec<AuthorId> = authors.iter().map(|a| a.id).collect();
    let mut books = store.books_for_authors(&ids, BookOrder::Id)?;

    Ok(authors
        .into_iter()
        .map(|author| {
            let own = books.remove(&author.id).unwrap_or_default();
            AuthorWithBooks::new(author, own)
        })
        .collect())
}
