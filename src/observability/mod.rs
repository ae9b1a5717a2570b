//! Observability subsystem for shelfbench
//!
//! - Structured logging through `tracing`
//! - Atomic service counters
//!
//! # Usage
//!
//! ```ignore
//! use shelfbench::observability::{init_logging, MetricsRegistry, DEFAULT_DIRECTIVE};
//!
//! init_logging(DEFAULT_DIRECTIVE);
//! let metrics = MetricsRegistry::new();
//! metrics.increment_cache_hits();
//! ```

mod logging;
mod metrics;

pub use logging::{init_logging, DEFAULT_DIRECTIVE};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
