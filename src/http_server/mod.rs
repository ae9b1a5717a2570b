//! # shelfbench HTTP Server Module
//!
//! Combines the lesson endpoints and observability routes into one Axum
//! server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/ex1/...` to `/api/ex5/...` - Timed lesson endpoints
//! - `/observability/*` - Health and counters

pub mod config;
pub mod errors;
pub mod handler;
pub mod lesson_routes;
pub mod observability_routes;
pub mod response;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use handler::{cached, timed};
pub use lesson_routes::LATEST_BOOKS_PATH;
pub use response::ApiResponse;
pub use server::{build_router, HttpServer};
pub use state::AppState;
