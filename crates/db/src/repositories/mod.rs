//! Repository layer.
//!
//! [`ProductRepository`] is the seam the HTTP layer depends on; it is held as
//! `Arc<dyn ProductRepository>` so tests can substitute an in-memory double.
//! [`ProductRepo`] is the PostgreSQL implementation.

pub mod product_repo;

use async_trait::async_trait;
use tienda_core::types::DbId;

use crate::models::product::{NewProduct, Product, UpdateProduct};

pub use product_repo::ProductRepo;

/// The five product operations. Each implementation call maps to exactly one
/// statement against the store.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, in storage order.
    async fn list(&self) -> Result<Vec<Product>, sqlx::Error>;

    /// The product with the given id, if any.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error>;

    /// Insert a product and return its generated id.
    async fn create(&self, input: &NewProduct) -> Result<DbId, sqlx::Error>;

    /// Overwrite all mutable columns. Returns `true` if a row was affected.
    async fn update(&self, id: DbId, input: &UpdateProduct) -> Result<bool, sqlx::Error>;

    /// Remove a product. Returns `true` if a row was affected.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}
