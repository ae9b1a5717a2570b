//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Bookstore store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A referenced record does not exist
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// An operation needs at least one author
    #[error("No authors available")]
    NoAuthors,

    /// A writer panicked while holding the table lock
    #[error("Store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Whether the error means "nothing there" rather than a broken store
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NoAuthors)
    }
}
