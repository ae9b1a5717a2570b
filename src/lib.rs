//! shelfbench - timed bookstore endpoints for comparing query access patterns
//!
//! Every lesson endpoint runs a naive or an optimized way of loading the
//! same data and reports how long it took, next to the data itself.

pub mod cache;
pub mod cli;
pub mod factory;
pub mod http_server;
pub mod lessons;
pub mod observability;
pub mod store;
pub mod timing;
