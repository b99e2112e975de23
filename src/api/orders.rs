//! Order endpoints.

use crate::api::response::{internal_error, ValidationErrorResponse};
use crate::api::AppState;
use crate::domain::{CreateOrderError, CreateOrderRequest, Order};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

const UNEXPECTED_LIST: &str = "Ocurrió un error inesperado al consultar las órdenes.";
const UNEXPECTED_CREATE: &str = "Ocurrió un error inesperado al crear la orden.";
const UNEXPECTED_UPDATE: &str = "Ocurrió un error inesperado al actualizar la orden.";

/// `GET /api/ordenes`
pub async fn list(State(state): State<AppState>) -> Response {
    match state.orders.get_all().await {
        Ok(details) => Json(details).into_response(),
        Err(err) => internal_error(UNEXPECTED_LIST, err),
    }
}

/// `GET /api/ordenes/{numeroOrden}`
pub async fn get_by_number(
    State(state): State<AppState>,
    Path(numero_orden): Path<i32>,
) -> Response {
    match state.orders.get_by_order_number(numero_orden).await {
        Ok(Some(detail)) => Json(detail).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => internal_error(UNEXPECTED_LIST, err),
    }
}

/// `GET /api/ordenes/paciente/{cedulaPaciente}`
pub async fn list_by_patient(
    State(state): State<AppState>,
    Path(cedula_paciente): Path<String>,
) -> Response {
    match state.orders.get_by_patient(&cedula_paciente).await {
        Ok(details) => Json(details).into_response(),
        Err(err) => internal_error(UNEXPECTED_LIST, err),
    }
}

/// `POST /api/ordenes`
///
/// `201` with the persisted detail, `409` with the aggregated error map
/// when validation rejects the order, `500` on storage faults.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Response {
    match state.orders.create(request).await {
        Ok(detail) => (StatusCode::CREATED, Json(detail)).into_response(),
        Err(CreateOrderError::Rejected(errors)) => (
            StatusCode::CONFLICT,
            Json(ValidationErrorResponse::new(errors)),
        )
            .into_response(),
        Err(CreateOrderError::Storage(err)) => internal_error(UNEXPECTED_CREATE, err),
    }
}

/// `PUT /api/ordenes/{numeroOrden}`
///
/// Header-only replace; `204` when found, `404` otherwise.
pub async fn update_header(
    State(state): State<AppState>,
    Path(numero_orden): Path<i32>,
    Json(order): Json<Order>,
) -> Response {
    match state.orders.update_header(numero_orden, order).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => internal_error(UNEXPECTED_UPDATE, err),
    }
}
