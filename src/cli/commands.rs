//! CLI command implementations
//!
//! `serve` boots the store, seeds it, wires the cache invalidation hook and
//! runs the HTTP server until Ctrl+C. `seed` runs the seed routine against
//! a fresh store and prints what it created.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::cache::{CacheBackend, InMemoryCache, InvalidationHook};
use crate::factory::{seed_store, DataGenerator, SeedConfig, SeedReport};
use crate::http_server::{AppState, HttpServer};
use crate::observability::{init_logging, MetricsRegistry, DEFAULT_DIRECTIVE};
use crate::store::{BookStore, BookWriteHook, StoreConfig};
use crate::timing::MeasuredResult;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    init_logging(DEFAULT_DIRECTIVE);
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a CLI command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            port,
            no_seed,
        } => serve(config.as_deref(), port, no_seed),
        Command::Seed {
            config,
            authors,
            books,
        } => {
            let report = seed(config.as_deref(), authors, books)?;
            let out = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::io_error(format!("Failed to encode report: {}", e)))?;
            println!("{}", out);
            Ok(())
        }
    }
}

/// Boot the application state.
///
/// The store is built without simulated latency so the seed runs at full
/// speed; the configured latency applies once seeding is done. Book writes
/// (including the seed) clear cached pages matching the configured pattern.
pub fn boot(config: &Config, seed: bool) -> CliResult<Arc<AppState>> {
    let metrics = Arc::new(MetricsRegistry::new());
    let cache: Arc<dyn CacheBackend> = Arc::new(InMemoryCache::new());

    let invalidation = InvalidationHook::new(Arc::clone(&cache), config.invalidation_pattern()?)
        .with_metrics(Arc::clone(&metrics));
    let metrics_hook: Arc<dyn BookWriteHook> = metrics.clone();

    let store = BookStore::new(StoreConfig {
        query_latency_us: 0,
        ..config.store.clone()
    })
    .with_hook(invalidation)
    .with_shared_hook(metrics_hook);

    let mut generator = DataGenerator::from_seed_option(config.seed.rng_seed);

    if seed && config.seed.enabled {
        let report = seed_store(&store, &mut generator, &config.seed)?;
        info!(
            countries = report.countries,
            authors = report.authors,
            books = report.books,
            skipped = report.skipped,
            "seed complete"
        );
    } else {
        info!("seeding disabled, starting with an empty store");
    }

    store.set_query_latency(config.store.query_latency());
    store.reset_query_count();

    Ok(Arc::new(AppState::new(
        Arc::new(store),
        cache,
        metrics,
        generator,
        config.lessons.clone(),
        config.cache.ttl(),
    )))
}

/// Boot and serve until Ctrl+C
pub fn serve(config_path: Option<&Path>, port: Option<u16>, no_seed: bool) -> CliResult<()> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
        config.validate()?;
    }

    let state = boot(&config, !no_seed)?;
    let server = HttpServer::new(config.server.clone(), state);

    // Start the async runtime and run the server
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Seed a fresh store and report what was created.
///
/// The result is `{"time": <seconds>, "objects": <report>}`.
pub fn seed(
    config_path: Option<&Path>,
    authors: Option<usize>,
    books: Option<usize>,
) -> CliResult<MeasuredResult<SeedReport>> {
    let config = Config::load_or_default(config_path)?;
    let plan = SeedConfig {
        authors: authors.unwrap_or(config.seed.authors),
        books: books.unwrap_or(config.seed.books),
        ..config.seed.clone()
    };

    let store = BookStore::new(StoreConfig {
        query_latency_us: 0,
        ..config.store.clone()
    });
    let mut generator = DataGenerator::from_seed_option(plan.rng_seed);

    let measured = MeasuredResult::try_capture(|| seed_store(&store, &mut generator, &plan))?;
    info!(
        elapsed = measured.elapsed,
        books = measured.payload.books,
        "seed run finished"
    );

    Ok(measured)
}
