//! Response payloads for failure cases.

use crate::domain::ErrorMap;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of a `409 Conflict` on validation failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    #[serde(rename = "traceId")]
    pub trace_id: String,

    pub errors: ErrorMap,
}

impl ValidationErrorResponse {
    pub fn new(errors: ErrorMap) -> Self {
        Self {
            trace_id: new_trace_id(),
            errors,
        }
    }
}

/// Correlation identifier attached to failure responses.
pub fn new_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// `500` with a generic message; the error detail is included for
/// operators, the trace id correlates with the logs.
pub fn internal_error(mensaje: &str, detail: impl std::fmt::Display) -> Response {
    let trace_id = new_trace_id();
    tracing::error!(trace_id = %trace_id, error = %detail, "request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "mensaje": mensaje,
            "traceId": trace_id,
            "detalle": detail.to_string(),
        })),
    )
        .into_response()
}
