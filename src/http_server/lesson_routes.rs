//! Lesson HTTP Routes
//!
//! Every endpoint is a GET whose body is wrapped by [`timed`].

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::Router;

use crate::lessons::caching::CACHE_KEY_PREFIX;
use crate::lessons::{
    advanced_prefetch, bulk_writes, caching, filtering, prefetch, select_related,
};
use crate::store::{AuthorId, NewBook};

use super::errors::ApiResult;
use super::handler::{blocking, cached, timed};
use super::response::ApiResponse;
use super::state::AppState;

const EX1: &str = "/ex1/database-vs-python-operations";
const EX2: &str = "/ex2/queryset-optimization/prefetch-related";
const EX3: &str = "/ex3/queryset-optimization/select-related";

/// Full path of the cached recent-books page, as seen by clients
pub const LATEST_BOOKS_PATH: &str = "/api/ex5/caching/";

/// Create lesson routes (mounted under `/api`)
pub fn lesson_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(&format!("{}/filter-at-python/", EX1), get(timed(filter_at_python)))
        .route(&format!("{}/filter-at-database/", EX1), get(timed(filter_at_database)))
        .route(
            &format!("{}/non-optimized-create/", EX1),
            get(timed(non_optimized_create)),
        )
        .route(&format!("{}/optimized-create/", EX1), get(timed(optimized_create)))
        .route(
            &format!("{}/without-optimization/", EX2),
            get(timed(authors_without_prefetch)),
        )
        .route(
            &format!("{}/with-optimization/", EX2),
            get(timed(authors_with_prefetch)),
        )
        .route(
            &format!("{}/without-optimization/", EX3),
            get(timed(books_without_join)),
        )
        .route(&format!("{}/with-optimization/", EX3), get(timed(books_with_join)))
        .route(
            "/ex4/queryset-optimization/advanced-prefetch/",
            get(timed(authors_with_last_book)),
        )
        .route(
            "/ex5/caching/",
            get(timed(cached(CACHE_KEY_PREFIX, LATEST_BOOKS_PATH, latest_books))),
        )
}

// ==================
// ex1
// ==================

async fn filter_at_python(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    let books = blocking(state, |s| filtering::filter_in_process(&s.store)).await?;
    ApiResponse::json(&books)
}

async fn filter_at_database(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    let books = blocking(state, |s| filtering::filter_in_store(&s.store)).await?;
    ApiResponse::json(&books)
}

/// Generate the rows for a create call, holding the shared generator only
/// while generating.
fn generate_rows(state: &AppState, author: AuthorId) -> Vec<NewBook> {
    let mut generator = state.generator();
    bulk_writes::generate_books(&mut generator, author, state.settings.create_count)
}

async fn non_optimized_create(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    blocking(state, |s| {
        let author = bulk_writes::first_author(&s.store)?;
        let rows = generate_rows(s, author.id);
        bulk_writes::insert_one_by_one(&s.store, rows)
    })
    .await?;
    Ok(ApiResponse::empty())
}

async fn optimized_create(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    blocking(state, |s| {
        let author = bulk_writes::first_author(&s.store)?;
        let rows = generate_rows(s, author.id);
        bulk_writes::insert_in_bulk(&s.store, rows)
    })
    .await?;
    Ok(ApiResponse::empty())
}

// ==================
// ex2
// ==================

async fn authors_without_prefetch(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    let authors = blocking(state, |s| prefetch::authors_with_books_lazy(&s.store)).await?;
    ApiResponse::json(&authors)
}

async fn authors_with_prefetch(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    let authors = blocking(state, |s| prefetch::authors_with_books_prefetched(&s.store)).await?;
    ApiResponse::json(&authors)
}

// ==================
// ex3
// ==================

async fn books_without_join(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    let books = blocking(state, |s| {
        select_related::books_with_authors_lazy(&s.store, s.settings.select_related_limit)
    })
    .await?;
    ApiResponse::json(&books)
}

async fn books_with_join(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    let books = blocking(state, |s| {
        select_related::books_with_authors_joined(&s.store, s.settings.select_related_limit)
    })
    .await?;
    ApiResponse::json(&books)
}

// ==================
// ex4 / ex5
// ==================

async fn authors_with_last_book(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    let authors = blocking(state, |s| advanced_prefetch::authors_with_last_book(&s.store)).await?;
    ApiResponse::json(&authors)
}

async fn latest_books(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    let books = blocking(state, |s| {
        caching::latest_books(&s.store, s.settings.latest_books_limit)
    })
    .await?;
    ApiResponse::json(&books)
}
