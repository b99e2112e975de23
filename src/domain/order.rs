//! Order header domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of an order.
///
/// Serialized as the Spanish status names the API consumers expect
/// (`"Pendiente"`, `"EnProceso"`, ...). New orders default to
/// [`OrderStatus::Pendiente`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pendiente,
    EnProceso,
    Completada,
    Cancelada,
}

/// A prescription header keyed by its business-unique order number.
///
/// The order number is the natural key used everywhere in the API; `id` is
/// the generated storage identifier and is never exposed to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Generated storage identifier; never business-visible.
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Business-unique order number.
    #[serde(rename = "numeroOrden")]
    pub order_number: i32,

    /// Cédula of the patient the order was issued for.
    #[serde(rename = "cedulaPaciente")]
    pub patient_id: String,

    /// Cédula of the prescribing practitioner.
    #[serde(rename = "cedulaMedico")]
    pub practitioner_id: String,

    /// Creation timestamp (UTC).
    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,

    /// Current lifecycle status.
    #[serde(rename = "estado", default)]
    pub status: OrderStatus,
}

impl Order {
    /// Creates an order with a freshly generated storage identifier.
    pub fn new(
        order_number: i32,
        patient_id: impl Into<String>,
        practitioner_id: impl Into<String>,
        created_at: DateTime<Utc>,
        status: OrderStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_number,
            patient_id: patient_id.into(),
            practitioner_id: practitioner_id.into(),
            created_at,
            status,
        }
    }
}
