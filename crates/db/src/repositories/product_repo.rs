//! Repository for the `productos` table.

use async_trait::async_trait;
use tienda_core::types::DbId;

use crate::models::product::{NewProduct, Product, UpdateProduct};
use crate::repositories::ProductRepository;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, precio, descripcion";

/// PostgreSQL-backed product operations.
#[derive(Debug, Clone)]
pub struct ProductRepo {
    pool: DbPool,
}

impl ProductRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepo {
    /// List all products. No ordering is imposed.
    async fn list(&self) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productos");
        sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productos WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, input: &NewProduct) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO productos (nombre, precio, descripcion)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&input.nombre)
        .bind(input.precio)
        .bind(&input.descripcion)
        .fetch_one(&self.pool)
        .await
    }

    /// Full replace: `None` fields are written as `NULL`.
    async fn update(&self, id: DbId, input: &UpdateProduct) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE productos SET nombre = $2, precio = $3, descripcion = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(&input.nombre)
        .bind(input.precio)
        .bind(&input.descripcion)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM productos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
