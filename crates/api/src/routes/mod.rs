pub mod product;

use axum::Router;

use crate::handlers::fallback;
use crate::state::AppState;

/// Build the route tree.
///
/// ```text
/// /productos        product CRUD (GET, POST, PUT, DELETE; anything else -> 405)
/// *                 404
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(product::router())
        .fallback(fallback::route_not_found)
}
