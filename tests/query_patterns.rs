//! Query Access Pattern Tests
//!
//! Each lesson pair must return equal payloads. The optimized variant
//! issues a constant number of store round trips while the naive one grows
//! with the number of rows.

use shelfbench::factory::{seed_store, DataGenerator, SeedConfig};
use shelfbench::lessons::{advanced_prefetch, bulk_writes, filtering, prefetch, select_related};
use shelfbench::store::{BookStore, StoreConfig, StoreError};

// =============================================================================
// Test Utilities
// =============================================================================

fn seeded_store(authors: usize, books: usize) -> BookStore {
    seeded_store_with(StoreConfig::default(), authors, books)
}

fn seeded_store_with(config: StoreConfig, authors: usize, books: usize) -> BookStore {
    let store = BookStore::new(config);
    let mut generator = DataGenerator::seeded(2024);
    let plan = SeedConfig {
        enabled: true,
        authors,
        books,
        rng_seed: None,
    };
    seed_store(&store, &mut generator, &plan).unwrap();
    store.reset_query_count();
    store
}

/// Run `f` and return how many round trips it cost
fn queries<T>(store: &BookStore, f: impl FnOnce(&BookStore) -> T) -> (T, u64) {
    store.reset_query_count();
    let out = f(store);
    (out, store.query_count())
}

// =============================================================================
// ex1: filtering
// =============================================================================

#[test]
fn test_filter_variants_agree() {
    let store = seeded_store(20, 200);

    let in_process = filtering::filter_in_process(&store).unwrap();
    let in_store = filtering::filter_in_store(&store).unwrap();

    assert_eq!(in_process, in_store);
    assert!(in_store
        .iter()
        .all(|b| b.title.starts_with(filtering::TITLE_PREFIX)));
}

// =============================================================================
// ex1: writes
// =============================================================================

#[test]
fn test_create_query_counts() {
    let config = StoreConfig {
        query_latency_us: 0,
        bulk_batch_size: 4,
    };
    let store = seeded_store_with(config, 3, 0);
    let mut generator = DataGenerator::seeded(1);

    let (created, cost) = queries(&store, |s| {
        bulk_writes::create_one_by_one(s, &mut generator, 10).unwrap()
    });
    assert_eq!(created, 10);
    assert_eq!(cost, 10 + 1);

    let (created, cost) = queries(&store, |s| {
        bulk_writes::create_in_bulk(s, &mut generator, 10).unwrap()
    });
    assert_eq!(created, 10);
    // ceil(10 / 4) inserts plus the author lookup
    assert_eq!(cost, 3 + 1);

    assert_eq!(store.book_count().unwrap(), 20);
}

#[test]
fn test_created_books_belong_to_first_author() {
    let store = seeded_store(3, 0);
    let first = store.first_author().unwrap().unwrap();
    let mut generator = DataGenerator::seeded(1);

    bulk_writes::create_in_bulk(&store, &mut generator, 5).unwrap();

    let books = store.books_by_author(first.id).unwrap();
    assert_eq!(books.len(), 5);
    assert!(books.iter().all(|b| b.publisher.is_empty()));
}

#[test]
fn test_create_without_authors_fails() {
    let store = BookStore::default();
    let mut generator = DataGenerator::seeded(1);

    assert_eq!(
        bulk_writes::create_in_bulk(&store, &mut generator, 5),
        Err(StoreError::NoAuthors)
    );
    assert_eq!(
        bulk_writes::create_one_by_one(&store, &mut generator, 5),
        Err(StoreError::NoAuthors)
    );
    assert_eq!(store.book_count().unwrap(), 0);
}

// =============================================================================
// ex2: prefetch
// =============================================================================

#[test]
fn test_prefetch_variants_agree() {
    let store = seeded_store(15, 60);

    let lazy = prefetch::authors_with_books_lazy(&store).unwrap();
    let prefetched = prefetch::authors_with_books_prefetched(&store).unwrap();

    assert_eq!(lazy, prefetched);
    assert_eq!(prefetched.len(), 15);
    let total: usize = prefetched.iter().map(|a| a.books.len()).sum();
    assert_eq!(total, 60);
}

#[test]
fn test_prefetch_query_counts() {
    for authors in [3, 12, 30] {
        let store = seeded_store(authors, authors * 2);

        let (_, lazy) = queries(&store, |s| prefetch::authors_with_books_lazy(s).unwrap());
        let (_, optimized) = queries(&store, |s| {
            prefetch::authors_with_books_prefetched(s).unwrap()
        });

        assert_eq!(lazy, 1 + authors as u64);
        assert_eq!(optimized, 2);
    }
}

// =============================================================================
// ex3: select related
// =============================================================================

#[test]
fn test_select_related_variants_agree() {
    let store = seeded_store(10, 50);

    let lazy = select_related::books_with_authors_lazy(&store, 25).unwrap();
    let joined = select_related::books_with_authors_joined(&store, 25).unwrap();

    assert_eq!(lazy, joined);
    assert_eq!(joined.len(), 25);
}

#[test]
fn test_select_related_query_counts() {
    for books in [5, 40] {
        let store = seeded_store(4, books);

        let (_, lazy) = queries(&store, |s| {
            select_related::books_with_authors_lazy(s, 10_000).unwrap()
        });
        let (_, joined) = queries(&store, |s| {
            select_related::books_with_authors_joined(s, 10_000).unwrap()
        });

        assert_eq!(lazy, 1 + 2 * books as u64);
        assert_eq!(joined, 1);
    }
}

// =============================================================================
// ex4: advanced prefetch
// =============================================================================

#[test]
fn test_last_book_is_most_recent() {
    let store = seeded_store(6, 0);
    let authors = store.all_authors().unwrap();
    let mut generator = DataGenerator::seeded(9);

    // Each author gets two books; the second one is newer.
    let mut newest = Vec::new();
    for author in &authors {
        store.insert_book(generator.new_book(author.id)).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        newest.push(store.insert_book(generator.new_book(author.id)).unwrap());
    }

    let result = advanced_prefetch::authors_with_last_book(&store).unwrap();

    assert_eq!(result.len(), authors.len());
    for (entry, book) in result.iter().zip(&newest) {
        assert_eq!(entry.last_book.as_ref().map(|b| b.id), Some(book.id));
    }
}

#[test]
fn test_last_book_query_count_is_constant() {
    for authors in [2, 25] {
        let store = seeded_store(authors, authors * 3);
        let (result, cost) = queries(&store, |s| {
            advanced_prefetch::authors_with_last_book(s).unwrap()
        });

        assert_eq!(result.len(), authors);
        assert_eq!(cost, 2);
    }
}

#[test]
fn test_author_without_books_has_no_last_book() {
    let store = seeded_store(3, 0);
    let result = advanced_prefetch::authors_with_last_book(&store).unwrap();
    assert!(result.iter().all(|a| a.last_book.is_none()));
}
