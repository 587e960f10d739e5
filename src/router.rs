use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::auth::CredentialVerifier;
use crate::db::SalesStorage;
use crate::handlers::{login, ventas};

/// Shared per-request context: the storage handle and the credential
/// verification seam, both injected at startup.
#[derive(Clone)]
pub struct VentasState {
    pub storage: SalesStorage,
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl VentasState {
    pub fn new(storage: SalesStorage, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { storage, verifier }
    }
}

/// Route table. `/ventas/` (trailing slash, query lookup) is a distinct path
/// from `/ventas`, mirroring the service's published surface.
pub fn ventas_router(state: VentasState) -> Router {
    Router::new()
        .route("/", get(ventas::inicio))
        .route(
            "/ventas",
            get(ventas::dame_ventas).post(ventas::crea_venta),
        )
        .route("/ventas/", get(ventas::dame_ventas_por_tienda))
        .route(
            "/ventas/{id}",
            get(ventas::dame_venta_por_id)
                .put(ventas::actualizar_venta)
                .delete(ventas::borra_venta),
        )
        .route("/login", post(login::login))
        .with_state(state)
}
