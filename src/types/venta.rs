use crate::error::VentasError;
use serde::{Deserialize, Serialize};

/// Store-name bounds for request bodies (create/update).
pub const TIENDA_BODY_MIN: usize = 4;
pub const TIENDA_BODY_MAX: usize = 10;

/// Store-name bounds for the query-parameter lookup. Looser than the body
/// bound; kept as-is to match the documented contract.
pub const TIENDA_QUERY_MIN: usize = 4;
pub const TIENDA_QUERY_MAX: usize = 20;

/// Id range accepted by the GET-by-id route. The PUT/DELETE routes perform no
/// such check, also per the documented contract.
pub const ID_LOOKUP_MIN: i64 = 1;
pub const ID_LOOKUP_MAX: i64 = 1000;

/// Request schema for a sale. `id` may be omitted on create, in which case
/// storage assigns one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Venta {
    #[serde(default)]
    pub id: Option<i64>,
    pub fecha: String,
    pub tienda: String,
    pub importe: f64,
}

impl Venta {
    /// Body-schema constraints, enforced before any persistence call.
    pub fn validate(&self) -> Result<(), VentasError> {
        let len = self.tienda.chars().count();
        if !(TIENDA_BODY_MIN..=TIENDA_BODY_MAX).contains(&len) {
            return Err(VentasError::Validation(format!(
                "tienda debe tener entre {TIENDA_BODY_MIN} y {TIENDA_BODY_MAX} caracteres"
            )));
        }
        Ok(())
    }
}

/// Bounds check for the `tienda` query parameter.
pub fn validate_tienda_query(tienda: &str) -> Result<(), VentasError> {
    let len = tienda.chars().count();
    if !(TIENDA_QUERY_MIN..=TIENDA_QUERY_MAX).contains(&len) {
        return Err(VentasError::Validation(format!(
            "tienda debe tener entre {TIENDA_QUERY_MIN} y {TIENDA_QUERY_MAX} caracteres"
        )));
    }
    Ok(())
}

/// Range check applied only on the GET-by-id route.
pub fn validate_lookup_id(id: i64) -> Result<(), VentasError> {
    if !(ID_LOOKUP_MIN..=ID_LOOKUP_MAX).contains(&id) {
        return Err(VentasError::Validation(format!(
            "id debe estar entre {ID_LOOKUP_MIN} y {ID_LOOKUP_MAX}"
        )));
    }
    Ok(())
}
