use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::auth::token;
use crate::error::{Mensaje, VentasError};
use crate::router::VentasState;
use crate::types::Usuario;

/// POST /login -> bearer token on an exact credential match.
/// A mismatch answers 404, not 401; the documented contract reuses not-found
/// for the auth failure and we keep that.
pub async fn login(
    State(state): State<VentasState>,
    Json(usuario): Json<Usuario>,
) -> Result<Response, VentasError> {
    if !state.verifier.verify(&usuario.correo, &usuario.clave) {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(Mensaje::new("Validar usuario o Clave")),
        )
            .into_response());
    }

    let token = token::issue(&usuario.correo)?;
    info!(correo = %usuario.correo, "login correcto");
    Ok((StatusCode::OK, Json(token)).into_response())
}
