//! Handler composition
//!
//! Endpoint handlers are plain `async fn(State<Arc<AppState>>)`. Wrappers
//! take a handler and return a new one with the same shape, so they stack:
//!
//! ```ignore
//! get(timed(cached("books", "/api/ex5/caching/", latest_books)))
//! ```

use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use futures_util::future::BoxFuture;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cache::page_key;
use crate::store::StoreResult;
use crate::timing::measure_async;

use super::errors::{ApiError, ApiResult};
use super::response::ApiResponse;
use super::state::AppState;

/// Future returned by composed handlers
pub type HandlerFuture = BoxFuture<'static, ApiResult<ApiResponse>>;

/// Wrap a handler so its body becomes `{"time": <secs>, "objects": <body>}`.
///
/// Failed handlers produce their error response unchanged.
pub fn timed<F, Fut>(
    handler: F,
) -> impl Fn(State<Arc<AppState>>) -> HandlerFuture + Clone + Send + Sync + 'static
where
    F: Fn(State<Arc<AppState>>) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = ApiResult<ApiResponse>> + Send + 'static,
{
    move |State(state): State<Arc<AppState>>| -> HandlerFuture {
        let handler = handler.clone();
        Box::pin(async move {
            let request_id = Uuid::new_v4();
            let metrics = Arc::clone(&state.metrics);

            match measure_async(|| handler(State(state))).await {
                Ok(response) => {
                    metrics.increment_requests_timed();
                    debug!(%request_id, time = ?response.body.get("time"), "timed response");
                    Ok(response)
                }
                Err(err) => {
                    metrics.increment_requests_failed();
                    warn!(%request_id, error = %err, "timed handler failed");
                    Err(err)
                }
            }
        })
    }
}

/// Serve a handler's successful responses from the page cache for
/// `AppState::cache_ttl`, keyed by `prefix` and `path`.
pub fn cached<F, Fut>(
    prefix: &'static str,
    path: &'static str,
    handler: F,
) -> impl Fn(State<Arc<AppState>>) -> HandlerFuture + Clone + Send + Sync + 'static
where
    F: Fn(State<Arc<AppState>>) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = ApiResult<ApiResponse>> + Send + 'static,
{
    move |State(state): State<Arc<AppState>>| -> HandlerFuture {
        let handler = handler.clone();
        Box::pin(async move {
            let key = page_key(prefix, path);
            let ttl = state.cache_ttl;
            let cache = Arc::clone(&state.cache);
            let metrics = Arc::clone(&state.metrics);

            if let Some(hit) = cache.get(&key) {
                metrics.increment_cache_hits();
                debug!(key = %key, "page cache hit");
                return Ok(ApiResponse::from_cached(hit).with_max_age(ttl.as_secs()));
            }

            metrics.increment_cache_misses();
            let store = Arc::clone(&state.store);
            let generation = store.book_write_generation();
            let response = handler(State(state)).await?;

            // A book write during the render may be missing from the page, and
            // its invalidation has already run. Serve it but do not keep it.
            if store.book_write_generation() != generation {
                debug!(key = %key, "book written during render, page not cached");
            } else if response.status.is_success() {
                cache.set(&key, response.to_cached(), ttl);
            }
            Ok(response.with_max_age(ttl.as_secs()))
        })
    }
}

/// Run synchronous store work on the blocking pool.
pub async fn blocking<T, F>(state: Arc<AppState>, work: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&AppState) -> StoreResult<T> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(move || work(&state))
        .await
        .map_err(|e| ApiError::Worker(e.to_string()))?;
    Ok(result?)
}
