//! Request handlers.
//!
//! [`product`] holds the five CRUD handlers, which delegate to the injected
//! [`ProductRepository`](tienda_db::repositories::ProductRepository) and map
//! errors via [`AppError`](crate::error::AppError). [`fallback`] answers
//! requests no route accepts.

pub mod fallback;
pub mod product;
