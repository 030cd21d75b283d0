use std::sync::Arc;

use tienda_db::repositories::ProductRepository;

use crate::request_log::RequestLog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: both members are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Product operations; PostgreSQL in production, a double in tests.
    pub products: Arc<dyn ProductRepository>,
    /// Append-only request log.
    pub request_log: Arc<RequestLog>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>, request_log: Arc<RequestLog>) -> Self {
        Self {
            products,
            request_log,
        }
    }
}
