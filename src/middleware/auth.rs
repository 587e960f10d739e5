use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use axum::response::{IntoResponse, Response};

use crate::auth::token;
use crate::config::CONFIG;
use crate::error::VentasError;

/// Ensure the inbound request carries a valid bearer token for the single
/// authorized identity.
///
/// Rejections:
/// - missing/malformed header, bad signature, expired token -> 401
/// - valid token whose `correo` claim is not the configured admin -> 403
pub fn ensure_authorized(headers: &HeaderMap) -> Result<(), Response> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .ok_or_else(|| VentasError::InvalidToken.into_response())?;

    let raw = auth
        .strip_prefix("Bearer ")
        .or_else(|| auth.strip_prefix("bearer "))
        .ok_or_else(|| VentasError::InvalidToken.into_response())?;

    let claims = token::validate(raw).map_err(IntoResponse::into_response)?;

    if claims.correo != CONFIG.admin_correo {
        return Err(VentasError::NotAuthorized.into_response());
    }
    Ok(())
}

/// Extractor form of the gate, attached to protected routes as an argument.
#[derive(Debug, Clone, Copy)]
pub struct RequireBearer;

impl<S> FromRequestParts<S> for RequireBearer
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        ensure_authorized(&parts.headers)?;
        Ok(Self)
    }
}
