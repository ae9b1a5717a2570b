//! # Fake Data Factory
//!
//! Builds dummy countries, authors and books, and seeds an empty store.
//! The generator is an explicit value owned by whoever needs it (the CLI
//! while seeding, the app state for the create endpoints); give it a fixed
//! seed for reproducible data.

mod words;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::store::{AuthorId, BookStore, CountryId, NewAuthor, NewBook, NewCountry, StoreResult};

pub use words::CONTINENTS;

/// Longest generated title or publisher
pub const MAX_TEXT_CHARS: usize = 200;

/// Seed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Seed an empty store on startup (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Authors to create, each with their own country (default: 5000)
    #[serde(default = "default_authors")]
    pub authors: usize,

    /// Books to create, spread over random authors (default: 20000)
    #[serde(default = "default_books")]
    pub books: usize,

    /// Fixed RNG seed; random if absent
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_enabled() -> bool {
    true
}

fn default_authors() -> usize {
    5000
}

fn default_books() -> usize {
    20000
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            authors: default_authors(),
            books: default_books(),
            rng_seed: None,
        }
    }
}

/// What a seed run created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeedReport {
    pub countries: usize,
    pub authors: usize,
    pub books: usize,
    /// True when the store already had books and nothing was created
    pub skipped: bool,
}

/// Random record generator
pub struct DataGenerator {
    rng: StdRng,
}

impl DataGenerator {
    /// Generator with an OS-provided seed
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    fn pick(&mut self, list: &[&'static str]) -> &'static str {
        list.choose(&mut self.rng).copied().unwrap_or_default()
    }

    pub fn country_name(&mut self) -> String {
        self.pick(words::COUNTRIES).to_string()
    }

    pub fn continent(&mut self) -> String {
        self.pick(words::CONTINENTS).to_string()
    }

    pub fn person_name(&mut self) -> String {
        format!(
            "{} {}",
            self.pick(words::FIRST_NAMES),
            self.pick(words::LAST_NAMES)
        )
    }

    /// Sentences of lorem-style words, at most `max_chars` long.
    ///
    /// Always returns at least one sentence; a single sentence longer than
    /// the limit is cut at a word boundary.
    pub fn text(&mut self, max_chars: usize) -> String {
        let mut text = String::new();
        loop {
            let sentence = self.sentence();
            let needed = if text.is_empty() {
                sentence.len()
            } else {
                sentence.len() + 1
            };

            if text.len() + needed > max_chars {
                if text.is_empty() {
                    text = truncate_at_word(&sentence, max_chars);
                }
                return text;
            }

            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&sentence);

            if self.rng.gen_bool(0.3) {
                return text;
            }
        }
    }

    fn sentence(&mut self) -> String {
        let count = self.rng.gen_range(3..=9);
        let mut picked: Vec<String> = (0..count)
            .map(|_| self.pick(words::WORDS).to_string())
            .collect();
        if let Some(first) = picked.first_mut() {
            *first = capitalize(first);
        }
        format!("{}.", picked.join(" "))
    }

    /// ISBN-10 in `G-RRR-PPPPP-C` form with a valid check digit
    pub fn isbn10(&mut self) -> String {
        let digits: Vec<u32> = (0..9).map(|_| self.rng.gen_range(0..10)).collect();
        let check = isbn10_check_digit(&digits);

        let body: String = digits
            .iter()
            .filter_map(|d| char::from_digit(*d, 10))
            .collect();
        format!("{}-{}-{}-{}", &body[..1], &body[1..4], &body[4..9], check)
    }

    pub fn new_country(&mut self) -> NewCountry {
        NewCountry {
            name: self.country_name(),
            continent: self.continent(),
        }
    }

    pub fn new_author(&mut self, country: CountryId) -> NewAuthor {
        NewAuthor {
            name: self.person_name(),
            country,
        }
    }

    pub fn new_book(&mut self, author: AuthorId) -> NewBook {
        NewBook {
            title: self.text(MAX_TEXT_CHARS),
            isbn: self.isbn10(),
            author,
            publisher: self.text(MAX_TEXT_CHARS),
        }
    }

    /// Pick one author id uniformly
    pub fn choose_author(&mut self, authors: &[AuthorId]) -> Option<AuthorId> {
        authors.choose(&mut self.rng).copied()
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn truncate_at_word(text: &str, max_chars: usize) -> String {
    if text.len() <= max_chars {
        return text.to_string();
    }
    let cut = &text[..max_chars];
    match cut.rfind(' ') {
        Some(space) if space > 0 => cut[..space].to_string(),
        _ => cut.to_string(),
    }
}

/// Check character for nine ISBN-10 digits (weights 10..2, mod 11)
pub fn isbn10_check_digit(digits: &[u32]) -> char {
    let sum: u32 = digits
        .iter()
        .zip((2..=10).rev())
        .map(|(d, w)| d * w)
        .sum();
    match (11 - sum % 11) % 11 {
        10 => 'X',
        n => char::from_digit(n, 10).unwrap_or('0'),
    }
}

/// Validate an ISBN-10, hyphens allowed
pub fn is_valid_isbn10(isbn: &str) -> bool {
    let chars: Vec<char> = isbn.chars().filter(|c| *c != '-').collect();
    if chars.len() != 10 {
        return false;
    }

    let mut sum = 0;
    for (i, c) in chars.into_iter().enumerate() {
        let value = match (i, c) {
            (9, 'X') => 10,
            (_, c) => match c.to_digit(10) {
                Some(d) => d,
                None => return false,
            },
        };
        sum += value * (10 - i as u32);
    }
    sum % 11 == 0
}

/// Fill an empty store with `config.authors` authors and `config.books`
/// books. Does nothing if the store already holds books.
pub fn seed_store(
    store: &BookStore,
    generator: &mut DataGenerator,
    config: &SeedConfig,
) -> StoreResult<SeedReport> {
    if store.book_count()? > 0 {
        info!("store already populated, skipping seed");
        return Ok(SeedReport {
            skipped: true,
            ..SeedReport::default()
        });
    }

    info!(
        authors = config.authors,
        books = config.books,
        "importing mock data"
    );

    let mut author_ids = Vec::with_capacity(config.authors);
    for _ in 0..config.authors {
        let country = store.insert_country(generator.new_country())?;
        let author = store.insert_author(generator.new_author(country.id))?;
        author_ids.push(author.id);
    }

    let mut rows: Vec<NewBook> = Vec::with_capacity(config.books);
    for _ in 0..config.books {
        match generator.choose_author(&author_ids) {
            Some(author) => rows.push(generator.new_book(author)),
            None => break,
        }
    }
    let written = store.bulk_insert_books(rows)?;

    Ok(SeedReport {
        countries: author_ids.len(),
        authors: author_ids.len(),
        books: written.len(),
        skipped: false,
    })
}
