use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted sale row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbVenta {
    pub id: i64,
    pub fecha: String,
    pub tienda: String,
    pub importe: f64,
}
