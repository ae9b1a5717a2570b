//! ex4: each author with their most recent book, via an ordered prefetch.

use crate::store::{AuthorId, BookOrder, BookStore, StoreResult};

use super::serializers::AuthorWithLastBook;

/// Authors plus one batched query for their books, newest first
pub fn authors_with_last_book(store: &BookStore) -> StoreResult<Vec<AuthorWithLastBook>> {
    let authors = store.all_authors()?;
    let ids: Vec<AuthorId> = authors.iter().map(|a| a.id).collect();
    let mut cached_books = store.books_for_authors(&ids, BookOrder::DatePublishedDesc)?;

    Ok(authors
        .into_iter()
        .map(|author| {
            let last_book = cached_books
                .remove(&author.id)
                .and_then(|books| books.into_iter().next());
            AuthorWithLastBook::new(author, last_book)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons::sample_store;

    #[test]
    fn test_last_book_is_newest() {
        let store = sample_store(2, 3);
        let payload = authors_with_last_book(&store).unwrap();

        assert_eq!(payload.len(), 2);
        // Books of author 1 are ids 1..=3 and share or increase timestamps.
        assert_eq!(payload[0].last_book.as_ref().unwrap().id, 3);
        assert_eq!(payload[1].last_book.as_ref().unwrap().id, 6);
    }

    #[test]
    fn test_author_without_books_has_none() {
        let store = sample_store(1, 0);
        let payload = authors_with_last_book(&store).unwrap();
        assert!(payload[0].last_book.is_none());
    }

    #[test]
    fn test_constant_query_count() {
        for authors in [1, 10, 30] {
            let store = sample_store(authors, 2);
            authors_with_last_book(&store).unwrap();
            assert_eq!(store.query_count(), 2);
        }
    }
}
