//! Line-item read endpoints.

use crate::api::response::internal_error;
use crate::api::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

const UNEXPECTED: &str = "Ocurrió un error inesperado al consultar los ítems.";

/// `GET /api/medicamentos`
pub async fn all_medications(State(state): State<AppState>) -> Response {
    match state.medications.get_all().await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => internal_error(UNEXPECTED, err),
    }
}

/// `GET /api/ordenes/{numeroOrden}/medicamentos`
pub async fn medications_by_order(
    State(state): State<AppState>,
    Path(numero_orden): Path<i32>,
) -> Response {
    match state.medications.get_by_order_number(numero_orden).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => internal_error(UNEXPECTED, err),
    }
}

/// `GET /api/ordenes/{numeroOrden}/medicamentos/{numeroItem}`
pub async fn medication_by_order_and_item(
    State(state): State<AppState>,
    Path((numero_orden, numero_item)): Path<(i32, i32)>,
) -> Response {
    match state
        .medications
        .get_by_order_and_item(numero_orden, numero_item)
        .await
    {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => internal_error(UNEXPECTED, err),
    }
}

/// `GET /api/procedimientos`
pub async fn all_procedures(State(state): State<AppState>) -> Response {
    match state.procedures.get_all().await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => internal_error(UNEXPECTED, err),
    }
}

/// `GET /api/ordenes/{numeroOrden}/procedimientos`
pub async fn procedures_by_order(
    State(state): State<AppState>,
    Path(numero_orden): Path<i32>,
) -> Response {
    match state.procedures.get_by_order_number(numero_orden).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => internal_error(UNEXPECTED, err),
    }
}

/// `GET /api/ordenes/{numeroOrden}/procedimientos/{numeroItem}`
pub async fn procedure_by_order_and_item(
    State(state): State<AppState>,
    Path((numero_orden, numero_item)): Path<(i32, i32)>,
) -> Response {
    match state
        .procedures
        .get_by_order_and_item(numero_orden, numero_item)
        .await
    {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => internal_error(UNEXPECTED, err),
    }
}

/// `GET /api/ayudas-diagnosticas`
pub async fn all_diagnostic_aids(State(state): State<AppState>) -> Response {
    match state.diagnostic_aids.get_all().await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => internal_error(UNEXPECTED, err),
    }
}

/// `GET /api/ordenes/{numeroOrden}/ayudas-diagnosticas`
pub async fn diagnostic_aids_by_order(
    State(state): State<AppState>,
    Path(numero_orden): Path<i32>,
) -> Response {
    match state
        .diagnostic_aids
        .get_by_order_number(numero_orden)
        .await
    {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => internal_error(UNEXPECTED, err),
    }
}

/// `GET /api/ordenes/{numeroOrden}/ayudas-diagnosticas/{numeroItem}`
pub async fn diagnostic_aid_by_order_and_item(
    State(state): State<AppState>,
    Path((numero_orden, numero_item)): Path<(i32, i32)>,
) -> Response {
    match state
        .diagnostic_aids
        .get_by_order_and_item(numero_orden, numero_item)
        .await
    {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => internal_error(UNEXPECTED, err),
    }
}
