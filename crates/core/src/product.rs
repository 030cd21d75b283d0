//! Product rules and the client-facing messages attached to them.

use crate::error::CoreError;

pub const MSG_CREATED: &str = "Producto creado";
pub const MSG_UPDATED: &str = "Producto actualizado exitosamente";
pub const MSG_DELETED: &str = "Producto eliminado";

pub const MSG_NOT_FOUND: &str = "Producto no encontrado";
pub const MSG_NOT_FOUND_FOR_UPDATE: &str = "Producto no encontrado para actualizar";
pub const MSG_NOT_FOUND_FOR_DELETE: &str = "Producto no encontrado para eliminar";

pub const MSG_NAME_AND_PRICE_REQUIRED: &str = "Nombre y precio son obligatorios";
pub const MSG_ID_REQUIRED: &str = "Debes proporcionar un ID en la URL (?id=X)";

/// Check the fields a new product cannot be created without.
///
/// `name` must be present and non-empty. `price` must be present and
/// non-zero; NaN counts as absent.
pub fn require_name_and_price<'a>(
    name: Option<&'a str>,
    price: Option<f64>,
) -> Result<(&'a str, f64), CoreError> {
    match (name, price) {
        (Some(name), Some(price)) if !name.is_empty() && price != 0.0 && !price.is_nan() => {
            Ok((name, price))
        }
        _ => Err(CoreError::Validation(MSG_NAME_AND_PRICE_REQUIRED)),
    }
}

/// Parse the raw `id` query value.
///
/// Returns `None` for anything that is not a base-10 integer; such an id
/// can never match a row.
pub fn parse_id(raw: &str) -> Option<crate::types::DbId> {
    raw.parse().ok()
}
