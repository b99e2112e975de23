//! Request and response shapes for the orders API.
//!
//! The entry types are shared between the creation request and the detail
//! response, mirroring the wire contract: line items never expose their
//! owning order number, it is implied by the surrounding order.

use crate::domain::order::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload for `POST /api/ordenes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "numeroOrden")]
    pub order_number: i32,

    #[serde(rename = "cedulaPaciente", default)]
    pub patient_id: String,

    #[serde(rename = "cedulaMedico", default)]
    pub practitioner_id: String,

    /// Optional; defaults to the current UTC time when omitted.
    #[serde(rename = "fechaCreacion", default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "estado", default)]
    pub status: OrderStatus,

    #[serde(rename = "medicamentos", default)]
    pub medications: Vec<MedicationEntry>,

    #[serde(rename = "procedimientos", default)]
    pub procedures: Vec<ProcedureEntry>,

    #[serde(rename = "ayudasDiagnosticas", default)]
    pub diagnostic_aids: Vec<DiagnosticAidEntry>,
}

/// Full order view: header plus its line items sorted by item number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(rename = "numeroOrden")]
    pub order_number: i32,

    #[serde(rename = "cedulaPaciente")]
    pub patient_id: String,

    #[serde(rename = "cedulaMedico")]
    pub practitioner_id: String,

    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "estado")]
    pub status: OrderStatus,

    #[serde(rename = "medicamentos")]
    pub medications: Vec<MedicationEntry>,

    #[serde(rename = "procedimientos")]
    pub procedures: Vec<ProcedureEntry>,

    #[serde(rename = "ayudasDiagnosticas")]
    pub diagnostic_aids: Vec<DiagnosticAidEntry>,
}

/// Medication line item as seen on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationEntry {
    #[serde(rename = "numeroItem")]
    pub item_number: i32,

    #[serde(rename = "catalogoId", default)]
    pub catalog_id: String,

    #[serde(rename = "dosis", default)]
    pub dose: String,

    #[serde(rename = "duracionTratamiento", default)]
    pub treatment_duration: i32,
}

/// Procedure line item as seen on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcedureEntry {
    #[serde(rename = "numeroItem")]
    pub item_number: i32,

    #[serde(rename = "catalogoId", default)]
    pub catalog_id: String,

    #[serde(rename = "numeroVecesRepite", default)]
    pub repeat_count: i32,

    #[serde(rename = "frecuencia", default)]
    pub frequency: String,
}

/// Diagnostic-aid line item as seen on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticAidEntry {
    #[serde(rename = "numeroItem")]
    pub item_number: i32,

    #[serde(rename = "catalogoId", default)]
    pub catalog_id: String,

    #[serde(rename = "cantidad", default)]
    pub quantity: i32,
}
