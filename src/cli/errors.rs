//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits non-zero. The
//! rendered message always starts with a stable `SHELF_CLI_*` code.

use std::io;

use thiserror::Error;

use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file missing, malformed or rejected
    ConfigError,
    /// I/O error
    IoError,
    /// Boot failed
    BootFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "SHELF_CLI_CONFIG_ERROR",
            Self::IoError => "SHELF_CLI_IO_ERROR",
            Self::BootFailed => "SHELF_CLI_BOOT_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("SHELF_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    #[error("SHELF_CLI_IO_ERROR: {0}")]
    Io(String),

    #[error("SHELF_CLI_BOOT_FAILED: {0}")]
    Boot(String),

    /// The store refused a boot-time write (seeding)
    #[error("SHELF_CLI_BOOT_FAILED: store error: {0}")]
    Store(#[from] StoreError),
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::Boot(msg.into())
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        match self {
            Self::Config(_) => CliErrorCode::ConfigError,
            Self::Io(_) => CliErrorCode::IoError,
            Self::Boot(_) | Self::Store(_) => CliErrorCode::BootFailed,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("bad port");
        assert_eq!(err.to_string(), "SHELF_CLI_CONFIG_ERROR: bad port");
        assert_eq!(err.code(), CliErrorCode::ConfigError);
    }

    #[test]
    fn test_store_error_is_boot_failure() {
        let err = CliError::from(StoreError::Poisoned);
        assert_eq!(err.code(), CliErrorCode::BootFailed);
        assert!(err.to_string().starts_with(err.code().code()));
        assert!(err.to_string().contains("poisoned"));
    }

    #[test]
    fn test_io_error_code() {
        let err = CliError::from(io::Error::new(io::ErrorKind::Other, "disk gone"));
        assert_eq!(err.code(), CliErrorCode::IoError);
    }
}
