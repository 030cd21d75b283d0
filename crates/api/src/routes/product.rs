//! Route definitions for the `/productos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{fallback, product};
use crate::state::AppState;

/// Routes mounted at `/productos`.
///
/// ```text
/// GET    /productos            -> fetch (all)
/// GET    /productos?id={id}    -> fetch (one)
/// POST   /productos            -> create
/// PUT    /productos?id={id}    -> update
/// DELETE /productos?id={id}    -> delete
/// HEAD   /productos            -> 405
/// *      /productos            -> 405
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/productos",
        get(product::fetch)
            .post(product::create)
            .put(product::update)
            .delete(product::delete)
            // `get` would otherwise answer HEAD too.
            .head(fallback::method_not_allowed)
            .fallback(fallback::method_not_allowed),
    )
}
