//! Tienda API server library.
//!
//! Exposes the building blocks (config, state, error handling, request
//! decoding, request log, routes) so integration tests and the binary
//! entrypoint share them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod request_log;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
