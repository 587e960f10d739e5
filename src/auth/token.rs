use crate::config::CONFIG;
use crate::error::VentasError;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Claims embedded in every issued token. `exp` is seconds since the epoch,
/// enforced by `jsonwebtoken` on decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    pub correo: String,
    pub exp: i64,
}

/// Sign a time-bound HS256 token carrying the identity claim.
pub fn issue(correo: &str) -> Result<String, VentasError> {
    issue_with_secret(correo, CONFIG.jwt_secret.as_bytes())
}

pub(crate) fn issue_with_secret(correo: &str, secret: &[u8]) -> Result<String, VentasError> {
    let exp = Utc::now().timestamp() + CONFIG.token_ttl_hours * 3600;
    let claims = TokenClaims {
        correo: correo.to_string(),
        exp,
    };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))?;
    Ok(token)
}

/// Verify signature and expiry, returning the embedded claims. Expired,
/// malformed, and signature-mismatched tokens all map to `InvalidToken` so
/// the gate never proceeds with empty claims.
pub fn validate(token: &str) -> Result<TokenClaims, VentasError> {
    validate_with_secret(token, CONFIG.jwt_secret.as_bytes())
}

pub(crate) fn validate_with_secret(token: &str, secret: &[u8]) -> Result<TokenClaims, VentasError> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<TokenClaims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|_| VentasError::InvalidToken)?;
    Ok(data.claims)
}
