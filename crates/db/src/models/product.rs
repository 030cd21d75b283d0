//! Product entity model and DTOs.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use tienda_core::error::CoreError;
use tienda_core::product::require_name_and_price;
use tienda_core::types::DbId;

/// A row from the `productos` table.
///
/// `nombre` and `precio` are nullable because an update replaces every
/// mutable column with whatever the request carried.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: DbId,
    pub nombre: Option<String>,
    pub precio: Option<f64>,
    pub descripcion: Option<String>,
}

/// Request body for creating a product, before validation.
///
/// Fields accept any JSON scalar: numbers become text and numeric strings
/// become prices. Values that cannot be read that way are treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProduct {
    #[serde(default, deserialize_with = "lenient_text")]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub precio: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub descripcion: Option<String>,
}

impl CreateProduct {
    /// Enforce the required fields, producing the row to insert.
    pub fn validate(self) -> Result<NewProduct, CoreError> {
        let (nombre, precio) = require_name_and_price(self.nombre.as_deref(), self.precio)?;
        Ok(NewProduct {
            nombre: nombre.to_owned(),
            precio,
            descripcion: self.descripcion,
        })
    }
}

/// A validated product ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub nombre: String,
    pub precio: f64,
    pub descripcion: Option<String>,
}

/// Request body for replacing a product. Absent fields are written as `NULL`.
///
/// Fields are read as leniently as in [`CreateProduct`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateProduct {
    #[serde(default, deserialize_with = "lenient_text")]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub precio: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub descripcion: Option<String>,
}

/// Any JSON value, sorted by how a product field can use it.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(f64),
    Other(IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(text)) => Some(text),
        Some(Scalar::Number(number)) => Some(number.to_string()),
        Some(Scalar::Other(_)) | None => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Number(number)) => Some(number),
        Some(Scalar::Text(text)) => text.trim().parse().ok().filter(|n: &f64| n.is_finite()),
        Some(Scalar::Other(_)) | None => None,
    })
}
