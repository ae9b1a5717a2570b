//! # Query Access Lessons
//!
//! Pairs of naive and optimized ways to load the same data. Each pair
//! returns equal payloads; only the number of store round trips differs.
//!
//! | Lesson | Naive | Optimized |
//! |---|---|---|
//! | ex1 reads | filter in process | filter in the store |
//! | ex1 writes | one insert per row | bulk insert |
//! | ex2 | lazy `books_by_author` per author | one batched prefetch |
//! | ex3 | lazy author/country lookups per book | one join |
//! | ex4 | - | ordered prefetch, first book per author |
//! | ex5 | - | recent books, served through the response cache |

pub mod advanced_prefetch;
pub mod bulk_writes;
pub mod caching;
pub mod filtering;
pub mod prefetch;
pub mod select_related;
pub mod serializers;

use serde::{Deserialize, Serialize};

/// Sizes used by the lesson endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonSettings {
    /// Books created by each ex1 create endpoint (default: 10000)
    #[serde(default = "default_create_count")]
    pub create_count: usize,

    /// Books listed by ex3 (default: 10000)
    #[serde(default = "default_select_related_limit")]
    pub select_related_limit: usize,

    /// Books listed by ex5 (default: 100)
    #[serde(default = "default_latest_books_limit")]
    pub latest_books_limit: usize,
}

fn default_create_count() -> usize {
    10_000
}

fn default_select_related_limit() -> usize {
    10_000
}

fn default_latest_books_limit() -> usize {
    100
}

impl Default for LessonSettings {
    fn default() -> Self {
        Self {
            create_count: default_create_count(),
            select_related_limit: default_select_related_limit(),
            latest_books_limit: default_latest_books_limit(),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_store(authors: usize, books_per_author: usize) -> crate::store::BookStore {
    use crate::store::{BookStore, NewAuthor, NewBook, NewCountry};

    let store = BookStore::default();
    for a in 0..authors {
        let country = store
            .insert_country(NewCountry {
                name: format!("Country {}", a),
                continent: "Europe".to_string(),
            })
            .unwrap();
        let author = store
            .insert_author(NewAuthor {
                name: format!("Author {}", a),
                country: country.id,
            })
            .unwrap();
        for b in 0..books_per_author {
            let title = if b % 2 == 0 {
                format!("A tale {}-{}", a, b)
            } else {
                format!("The sequel {}-{}", a, b)
            };
            store
                .insert_book(NewBook {
                    title,
                    isbn: "0-306-40615-2".to_string(),
                    author: author.id,
                    publisher: "House".to_string(),
                })
                .unwrap();
        }
    }
    store.reset_query_count();
    store
}
