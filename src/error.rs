use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum VentasError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("not authorized")]
    NotAuthorized,

    #[error("token encoding error: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

/// Error and status bodies follow the service's `{"mensaje": ...}` convention.
#[derive(Debug, Serialize)]
pub struct Mensaje {
    pub mensaje: String,
}

impl Mensaje {
    pub fn new(texto: impl Into<String>) -> Self {
        Self {
            mensaje: texto.into(),
        }
    }
}

impl IntoResponse for VentasError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            VentasError::Validation(detalle) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Mensaje::new(detalle))
            }
            VentasError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Mensaje::new("Token invalido o expirado"),
            ),
            VentasError::NotAuthorized => (StatusCode::FORBIDDEN, Mensaje::new("No Autorizado")),
            VentasError::TokenEncoding(_) | VentasError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Mensaje::new("Error interno del servidor"),
            ),
        };
        (status, Json(body)).into_response()
    }
}
