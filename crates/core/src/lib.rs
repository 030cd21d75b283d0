//! Domain types shared by the `tienda` crates.
//!
//! Nothing in here performs I/O: the database layer lives in `tienda-db`
//! and the HTTP surface in `tienda-api`.

pub mod error;
pub mod product;
pub mod types;
