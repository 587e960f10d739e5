use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use crate::db::DbVenta;
use crate::error::{Mensaje, VentasError};
use crate::middleware::auth::RequireBearer;
use crate::router::VentasState;
use crate::types::venta::{validate_lookup_id, validate_tienda_query};
use crate::types::Venta;

/// GET / -> plain HTML greeting.
pub async fn inicio() -> Html<&'static str> {
    Html("<h2>Aplicacion de Ventas</h2>")
}

/// GET /ventas -> all sales. The only token-gated route.
pub async fn dame_ventas(
    _auth: RequireBearer,
    State(state): State<VentasState>,
) -> Result<Json<Vec<DbVenta>>, VentasError> {
    let ventas = state.storage.list_all().await?;
    Ok(Json(ventas))
}

/// GET /ventas/{id} -> one sale. Only this lookup carries the id range check.
pub async fn dame_venta_por_id(
    State(state): State<VentasState>,
    Path(id): Path<i64>,
) -> Result<Response, VentasError> {
    validate_lookup_id(id)?;
    match state.storage.get_by_id(id).await? {
        Some(venta) => Ok(Json(venta).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(Mensaje::new("No se encontro el identificador")),
        )
            .into_response()),
    }
}

#[derive(Debug, Deserialize)]
pub struct TiendaQuery {
    pub tienda: String,
}

/// GET /ventas/?tienda= -> first sale for that store.
/// Responds 201 on a hit; a read returning 201 is part of the documented
/// contract and kept as-is.
pub async fn dame_ventas_por_tienda(
    State(state): State<VentasState>,
    Query(query): Query<TiendaQuery>,
) -> Result<Response, VentasError> {
    validate_tienda_query(&query.tienda)?;
    match state.storage.get_by_tienda(&query.tienda).await? {
        Some(venta) => Ok((StatusCode::CREATED, Json(venta)).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(Mensaje::new("No se encontro el la Tienda")),
        )
            .into_response()),
    }
}

/// POST /ventas -> create a sale. Storage assigns the id when omitted.
pub async fn crea_venta(
    State(state): State<VentasState>,
    Json(venta): Json<Venta>,
) -> Result<Response, VentasError> {
    venta.validate()?;
    let id = state.storage.create(&venta).await?;
    info!(id, tienda = %venta.tienda, "venta registrada");
    Ok((
        StatusCode::OK,
        Json(Mensaje::new("Venta registrada con Exito")),
    )
        .into_response())
}

/// PUT /ventas/{id} -> full overwrite of fecha/tienda/importe.
/// No range check on the id here, matching the documented contract.
pub async fn actualizar_venta(
    State(state): State<VentasState>,
    Path(id): Path<i64>,
    Json(venta): Json<Venta>,
) -> Result<Response, VentasError> {
    venta.validate()?;
    if !state.storage.update(id, &venta).await? {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(Mensaje::new("No se encontro el identificador")),
        )
            .into_response());
    }
    info!(id, "venta actualizada");
    Ok((
        StatusCode::OK,
        Json(Mensaje::new("Venta Actualizada con Exito")),
    )
        .into_response())
}

/// DELETE /ventas/{id}.
pub async fn borra_venta(
    State(state): State<VentasState>,
    Path(id): Path<i64>,
) -> Result<Response, VentasError> {
    if !state.storage.delete(id).await? {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(Mensaje::new("No se encuentra el id a Borrar, Validar")),
        )
            .into_response());
    }
    info!(id, "venta eliminada");
    Ok((
        StatusCode::OK,
        Json(Mensaje::new("Venta Eliminada con Exito")),
    )
        .into_response())
}
