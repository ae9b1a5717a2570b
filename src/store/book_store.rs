//! Table storage, round-trip accounting and write hooks.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::errors::{StoreError, StoreResult};
use super::models::{
    Author, AuthorId, Book, BookId, BookOrder, BookRow, Country, CountryId, NewAuthor, NewBook,
    NewCountry,
};

/// Observer for committed Book writes.
///
/// Called synchronously on the writer's thread once per insert call, after
/// the rows are visible to readers. Hooks cannot fail the write.
pub trait BookWriteHook: Send + Sync {
    fn on_write(&self, written: &[Book]);
}

/// Store tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Simulated latency per round trip, in microseconds (default: 0)
    #[serde(default)]
    pub query_latency_us: u64,

    /// Rows per insert statement in bulk writes (default: 1000)
    #[serde(default = "default_bulk_batch_size")]
    pub bulk_batch_size: usize,
}

fn default_bulk_batch_size() -> usize {
    1000
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            query_latency_us: 0,
            bulk_batch_size: default_bulk_batch_size(),
        }
    }
}

impl StoreConfig {
    pub fn query_latency(&self) -> Duration {
        Duration::from_micros(self.query_latency_us)
    }
}

#[derive(Debug, Default)]
struct Tables {
    countries: BTreeMap<CountryId, Country>,
    authors: BTreeMap<AuthorId, Author>,
    books: BTreeMap<BookId, Book>,
    /// Foreign key index: author -> book ids, ascending
    books_by_author: HashMap<AuthorId, Vec<BookId>>,
    /// Secondary index on `date_published`
    books_by_date: BTreeSet<(DateTime<Utc>, BookId)>,
    last_country_id: CountryId,
    last_author_id: AuthorId,
    last_book_id: BookId,
}

impl Tables {
    fn author(&self, id: AuthorId) -> StoreResult<&Author> {
        self.authors
            .get(&id)
            .ok_or_else(|| StoreError::not_found("author", id))
    }

    fn country(&self, id: CountryId) -> StoreResult<&Country> {
        self.countries
            .get(&id)
            .ok_or_else(|| StoreError::not_found("country", id))
    }

    fn insert_book(&mut self, new: NewBook, now: DateTime<Utc>) -> Book {
        self.last_book_id += 1;
        let book = Book {
            id: self.last_book_id,
            title: new.title,
            isbn: new.isbn,
            author: new.author,
            date_published: now,
            publisher: new.publisher,
        };

        self.books_by_author
            .entry(book.author)
            .or_default()
            .push(book.id);
        self.books_by_date.insert((book.date_published, book.id));
        self.books.insert(book.id, book.clone());
        book
    }

    fn ordered_books(&self, order: BookOrder, limit: Option<usize>) -> Vec<&Book> {
        let limit = limit.unwrap_or(usize::MAX);
        match order {
            BookOrder::Id => self.books.values().take(limit).collect(),
            BookOrder::IdDesc => self.books.values().rev().take(limit).collect(),
            BookOrder::DatePublishedDesc => self
                .books_by_date
                .iter()
                .rev()
                .filter_map(|(_, id)| self.books.get(id))
                .take(limit)
                .collect(),
        }
    }

    fn books_of(&self, author: AuthorId) -> Vec<Book> {
        self.books_by_author
            .get(&author)
            .map(|ids| ids.iter().filter_map(|id| self.books.get(id)).cloned().collect())
            .unwrap_or_default()
    }
}

/// In-memory bookstore with per-call round-trip accounting.
pub struct BookStore {
    tables: RwLock<Tables>,
    queries: AtomicU64,
    book_writes: AtomicU64,
    latency_us: AtomicU64,
    bulk_batch_size: usize,
    hooks: Vec<Arc<dyn BookWriteHook>>,
}

impl BookStore {
    /// Create an empty store
    pub fn new(config: StoreConfig) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            queries: AtomicU64::new(0),
            book_writes: AtomicU64::new(0),
            latency_us: AtomicU64::new(config.query_latency_us),
            bulk_batch_size: config.bulk_batch_size.max(1),
            hooks: Vec::new(),
        }
    }

    /// Register a hook fired after every committed Book write
    pub fn with_hook(mut self, hook: impl BookWriteHook + 'static) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    /// Register an already shared hook
    pub fn with_shared_hook(mut self, hook: Arc<dyn BookWriteHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Total round trips issued since creation or the last reset
    pub fn query_count(&self) -> u64 {
        self.queries.load(Ordering::Relaxed)
    }

    pub fn reset_query_count(&self) {
        self.queries.store(0, Ordering::Relaxed);
    }

    /// Number of committed Book insert calls.
    ///
    /// Bumped while the write lock is held, before hooks run. A reader that
    /// sees the same value before and after its work saw no book write.
    pub fn book_write_generation(&self) -> u64 {
        self.book_writes.load(Ordering::SeqCst)
    }

    /// Change the simulated per-query latency
    pub fn set_query_latency(&self, latency: Duration) {
        let micros = u64::try_from(latency.as_micros()).unwrap_or(u64::MAX);
        self.latency_us.store(micros, Ordering::Relaxed);
    }

    pub fn query_latency(&self) -> Duration {
        Duration::from_micros(self.latency_us.load(Ordering::Relaxed))
    }

    fn round_trip(&self, statement: &'static str) {
        self.queries.fetch_add(1, Ordering::Relaxed);
        trace!(statement, "store query");

        let latency = self.query_latency();
        if !latency.is_zero() {
            std::thread::sleep(latency);
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::Poisoned)
    }

    fn notify(&self, written: &[Book]) {
        if written.is_empty() {
            return;
        }
        for hook in &self.hooks {
            hook.on_write(written);
        }
    }

    // ==================
    // Writes
    // ==================

    pub fn insert_country(&self, new: NewCountry) -> StoreResult<Country> {
        self.round_trip("INSERT country");
        let mut tables = self.write()?;

        tables.last_country_id += 1;
        let country = Country {
            id: tables.last_country_id,
            name: new.name,
            continent: new.continent,
        };
        tables.countries.insert(country.id, country.clone());
        Ok(country)
    }

    pub fn insert_author(&self, new: NewAuthor) -> StoreResult<Author> {
        self.round_trip("INSERT author");
        let mut tables = self.write()?;
        tables.country(new.country)?;

        tables.last_author_id += 1;
        let author = Author {
            id: tables.last_author_id,
            name: new.name,
            country: new.country,
        };
        tables.authors.insert(author.id, author.clone());
        Ok(author)
    }

    /// Insert one book. Fires the write hooks on success.
    pub fn insert_book(&self, new: NewBook) -> StoreResult<Book> {
        self.round_trip("INSERT book");
        let book = {
            let mut tables = self.write()?;
            tables.author(new.author)?;
            let book = tables.insert_book(new, Utc::now());
            self.book_writes.fetch_add(1, Ordering::SeqCst);
            book
        };

        self.notify(std::slice::from_ref(&book));
        Ok(book)
    }

    /// Insert many books, one statement per `bulk_batch_size` rows.
    ///
    /// All authors are checked before anything is written, so a bad row
    /// rejects the whole call. Write hooks fire once for the entire batch.
    pub fn bulk_insert_books(&self, rows: Vec<NewBook>) -> StoreResult<Vec<Book>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        // Pay for every statement up front so the lock is not held across the
        // simulated latency.
        for _ in 0..rows.len().div_ceil(self.bulk_batch_size) {
            self.round_trip("INSERT book (bulk)");
        }

        let written = {
            let mut tables = self.write()?;
            for row in &rows {
                tables.author(row.author)?;
            }

            let now = Utc::now();
            let written: Vec<Book> = rows
                .into_iter()
                .map(|row| tables.insert_book(row, now))
                .collect();
            self.book_writes.fetch_add(1, Ordering::SeqCst);
            written
        };

        debug!(rows = written.len(), "bulk insert committed");
        self.notify(&written);
        Ok(written)
    }

    // ==================
    // Reads
    // ==================

    pub fn book_count(&self) -> StoreResult<usize> {
        self.round_trip("SELECT COUNT(*) FROM book");
        Ok(self.read()?.books.len())
    }

    pub fn author_count(&self) -> StoreResult<usize> {
        self.round_trip("SELECT COUNT(*) FROM author");
        Ok(self.read()?.authors.len())
    }

    pub fn all_books(&self) -> StoreResult<Vec<Book>> {
        self.books(BookOrder::Id, None)
    }

    /// Books in the given order, optionally limited
    pub fn books(&self, order: BookOrder, limit: Option<usize>) -> StoreResult<Vec<Book>> {
        self.round_trip("SELECT book");
        let tables = self.read()?;
        Ok(tables
            .ordered_books(order, limit)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Books whose title starts with `prefix`, filtered inside the store
    pub fn books_title_starts_with(&self, prefix: &str) -> StoreResult<Vec<Book>> {
        self.round_trip("SELECT book WHERE title LIKE");
        let tables = self.read()?;
        Ok(tables
            .books
            .values()
            .filter(|b| b.title.starts_with(prefix))
            .cloned()
            .collect())
    }

    /// Books with their author and country joined in
    pub fn books_joined(&self, order: BookOrder, limit: Option<usize>) -> StoreResult<Vec<BookRow>> {
        self.round_trip("SELECT book JOIN author JOIN country");
        let tables = self.read()?;

        tables
            .ordered_books(order, limit)
            .into_iter()
            .map(|book| -> StoreResult<BookRow> {
                let author = tables.author(book.author)?;
                let country = tables.country(author.country)?;
                Ok(BookRow {
                    book: book.clone(),
                    author: author.clone(),
                    country: country.clone(),
                })
            })
            .collect()
    }

    pub fn first_author(&self) -> StoreResult<Option<Author>> {
        self.round_trip("SELECT author LIMIT 1");
        Ok(self.read()?.authors.values().next().cloned())
    }

    pub fn all_authors(&self) -> StoreResult<Vec<Author>> {
        self.round_trip("SELECT author");
        Ok(self.read()?.authors.values().cloned().collect())
    }

    pub fn author(&self, id: AuthorId) -> StoreResult<Author> {
        self.round_trip("SELECT author WHERE id");
        self.read()?.author(id).cloned()
    }

    pub fn country(&self, id: CountryId) -> StoreResult<Country> {
        self.round_trip("SELECT country WHERE id");
        self.read()?.country(id).cloned()
    }

    /// Books of one author, ascending id
    pub fn books_by_author(&self, author: AuthorId) -> StoreResult<Vec<Book>> {
        self.round_trip("SELECT book WHERE author_id");
        Ok(self.read()?.books_of(author))
    }

    /// Books of many authors in one round trip, grouped per author.
    ///
    /// Every requested author gets an entry, empty if they have no books.
    pub fn books_for_authors(
        &self,
        authors: &[AuthorId],
        order: BookOrder,
    ) -> StoreResult<HashMap<AuthorId, Vec<Book>>> {
        self.round_trip("SELECT book WHERE author_id IN");
        let tables = self.read()?;

        Ok(authors
            .iter()
            .map(|&id| {
                let mut books = tables.books_of(id);
                order.sort(&mut books);
                (id, books)
            })
            .collect())
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn new_book(author: AuthorId, title: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            isbn: "0-306-40615-2".to_string(),
            author,
            publisher: "Acme".to_string(),
        }
    }

    fn store_with_author() -> (BookStore, Author) {
        let store = BookStore::default();
        let country = store
            .insert_country(NewCountry {
                name: "Portugal".to_string(),
                continent: "Europe".to_string(),
            })
            .unwrap();
        let author = store
            .insert_author(NewAuthor {
                name: "Ana".to_string(),
                country: country.id,
            })
            .unwrap();
        (store, author)
    }

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<usize>>,
    }

    impl BookWriteHook for Arc<Recorder> {
        fn on_write(&self, written: &[Book]) {
            self.calls.lock().unwrap().push(written.len());
        }
    }

    #[test]
    fn test_ids_start_at_one() {
        let (store, author) = store_with_author();
        assert_eq!(author.id, 1);
        let book = store.insert_book(new_book(author.id, "Alpha")).unwrap();
        assert_eq!(book.id, 1);
    }

    #[test]
    fn test_every_call_is_one_query() {
        let (store, author) = store_with_author();
        store.reset_query_count();

        store.insert_book(new_book(author.id, "A")).unwrap();
        store.all_books().unwrap();
        store.books_by_author(author.id).unwrap();
        store.books_joined(BookOrder::Id, None).unwrap();

        assert_eq!(store.query_count(), 4);
    }

    #[test]
    fn test_insert_author_requires_country() {
        let store = BookStore::default();
        let err = store
            .insert_author(NewAuthor {
                name: "Nobody".to_string(),
                country: 99,
            })
            .unwrap_err();
        assert_eq!(err, StoreError::not_found("country", 99));
    }

    #[test]
    fn test_insert_book_requires_author() {
        let (store, _) = store_with_author();
        let err = store.insert_book(new_book(42, "Orphan")).unwrap_err();
        assert_eq!(err, StoreError::not_found("author", 42));
        assert_eq!(store.book_count().unwrap(), 0);
    }

    #[test]
    fn test_bulk_insert_batches_statements() {
        let store = BookStore::new(StoreConfig {
            query_latency_us: 0,
            bulk_batch_size: 3,
        });
        let country = store
            .insert_country(NewCountry {
                name: "Chile".to_string(),
                continent: "South America".to_string(),
            })
            .unwrap();
        let author = store
            .insert_author(NewAuthor {
                name: "Bo".to_string(),
                country: country.id,
            })
            .unwrap();
        store.reset_query_count();

        let rows = (0..7).map(|i| new_book(author.id, &format!("B{}", i))).collect();
        let written = store.bulk_insert_books(rows).unwrap();

        assert_eq!(written.len(), 7);
        assert_eq!(store.query_count(), 3);
    }

    #[test]
    fn test_bulk_insert_latency_is_paid_outside_the_lock() {
        let store = Arc::new(BookStore::new(StoreConfig {
            query_latency_us: 0,
            bulk_batch_size: 1,
        }));
        let country = store
            .insert_country(NewCountry {
                name: "Peru".to_string(),
                continent: "South America".to_string(),
            })
            .unwrap();
        let author = store
            .insert_author(NewAuthor {
                name: "Rosa".to_string(),
                country: country.id,
            })
            .unwrap();
        store.set_query_latency(Duration::from_millis(40));

        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                let rows = (0..5).map(|i| new_book(author.id, &format!("W{}", i))).collect();
                store.bulk_insert_books(rows).unwrap();
            })
        };

        // The writer is now inside 200ms of simulated statements.
        std::thread::sleep(Duration::from_millis(20));
        let start = std::time::Instant::now();
        let _ = store.tables.read().unwrap().books.len();
        let waited = start.elapsed();

        writer.join().unwrap();
        assert!(waited < Duration::from_millis(100), "reader waited {:?}", waited);
        assert_eq!(store.book_count().unwrap(), 5);
    }

    #[test]
    fn test_book_write_generation() {
        let (store, author) = store_with_author();
        assert_eq!(store.book_write_generation(), 0);

        store.insert_book(new_book(author.id, "One")).unwrap();
        store
            .bulk_insert_books(vec![new_book(author.id, "Two"), new_book(author.id, "Three")])
            .unwrap();
        assert_eq!(store.book_write_generation(), 2);

        assert!(store.insert_book(new_book(99, "Orphan")).is_err());
        store.bulk_insert_books(Vec::new()).unwrap();
        assert_eq!(store.book_write_generation(), 2);
    }

    #[test]
    fn test_bulk_insert_is_all_or_nothing() {
        let (store, author) = store_with_author();
        let rows = vec![new_book(author.id, "Ok"), new_book(77, "Bad")];
        assert!(store.bulk_insert_books(rows).is_err());
        assert_eq!(store.book_count().unwrap(), 0);
    }

    #[test]
    fn test_title_prefix_filter() {
        let (store, author) = store_with_author();
        store.insert_book(new_book(author.id, "Apple")).unwrap();
        store.insert_book(new_book(author.id, "banana")).unwrap();
        store.insert_book(new_book(author.id, "Avocado")).unwrap();

        let titles: Vec<_> = store
            .books_title_starts_with("A")
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["Apple", "Avocado"]);
    }

    #[test]
    fn test_books_for_authors_includes_empty_entries() {
        let (store, author) = store_with_author();
        let other = store
            .insert_author(NewAuthor {
                name: "Idle".to_string(),
                country: author.country,
            })
            .unwrap();
        store.insert_book(new_book(author.id, "One")).unwrap();
        store.insert_book(new_book(author.id, "Two")).unwrap();

        let grouped = store
            .books_for_authors(&[author.id, other.id], BookOrder::DatePublishedDesc)
            .unwrap();
        assert_eq!(grouped[&author.id].len(), 2);
        assert_eq!(grouped[&author.id][0].title, "Two");
        assert!(grouped[&other.id].is_empty());
    }

    #[test]
    fn test_books_joined_with_limit_and_order() {
        let (store, author) = store_with_author();
        for i in 0..5 {
            store.insert_book(new_book(author.id, &format!("T{}", i))).unwrap();
        }

        let rows = store.books_joined(BookOrder::IdDesc, Some(2)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].book.id, 5);
        assert_eq!(rows[0].author.name, "Ana");
        assert_eq!(rows[0].country.name, "Portugal");
    }

    #[test]
    fn test_hooks_fire_once_per_call() {
        let recorder = Arc::new(Recorder::default());
        let (store, author) = store_with_author();
        let store = store.with_hook(Arc::clone(&recorder));

        store.insert_book(new_book(author.id, "Solo")).unwrap();
        store
            .bulk_insert_books(vec![new_book(author.id, "x"), new_book(author.id, "y")])
            .unwrap();
        let _ = store.insert_book(new_book(404, "never"));

        assert_eq!(*recorder.calls.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_query_latency_is_adjustable() {
        let store = BookStore::default();
        assert!(store.query_latency().is_zero());
        store.set_query_latency(Duration::from_millis(2));
        assert_eq!(store.query_latency(), Duration::from_millis(2));
    }
}
