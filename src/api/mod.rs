//! HTTP surface.
//!
//! Thin axum handlers over the application services. Status mapping:
//! validation rejections become `409 Conflict` with the full error map
//! and a trace id, unknown resources become `404`, storage faults become
//! `500` with a generic Spanish message plus the error detail.

pub mod items;
pub mod orders;
pub mod response;

use crate::service::{DiagnosticAidService, MedicationService, OrderService, ProcedureService};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<OrderService>,
    pub medications: Arc<MedicationService>,
    pub procedures: Arc<ProcedureService>,
    pub diagnostic_aids: Arc<DiagnosticAidService>,
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/ordenes", get(orders::list).post(orders::create))
        .route(
            "/api/ordenes/:numero_orden",
            get(orders::get_by_number).put(orders::update_header),
        )
        .route(
            "/api/ordenes/paciente/:cedula_paciente",
            get(orders::list_by_patient),
        )
        .route(
            "/api/ordenes/:numero_orden/medicamentos",
            get(items::medications_by_order),
        )
        .route(
            "/api/ordenes/:numero_orden/medicamentos/:numero_item",
            get(items::medication_by_order_and_item),
        )
        .route("/api/medicamentos", get(items::all_medications))
        .route(
            "/api/ordenes/:numero_orden/procedimientos",
            get(items::procedures_by_order),
        )
        .route(
            "/api/ordenes/:numero_orden/procedimientos/:numero_item",
            get(items::procedure_by_order_and_item),
        )
        .route("/api/procedimientos", get(items::all_procedures))
        .route(
            "/api/ordenes/:numero_orden/ayudas-diagnosticas",
            get(items::diagnostic_aids_by_order),
        )
        .route(
            "/api/ordenes/:numero_orden/ayudas-diagnosticas/:numero_item",
            get(items::diagnostic_aid_by_order_and_item),
        )
        .route("/api/ayudas-diagnosticas", get(items::all_diagnostic_aids))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
