use serde::{Deserialize, Serialize};

/// Login request body. Never persisted; checked against the configured pair
/// and discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub correo: String,
    pub clave: String,
}
