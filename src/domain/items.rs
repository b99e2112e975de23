//! Line-item domain models.
//!
//! Three heterogeneous line-item kinds belong to an order: medications,
//! procedures and diagnostic aids. Each is stored in its own collection,
//! keyed by `(numeroOrden, numeroItem)`; item numbers are unique across
//! the union of the three kinds within one order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A prescribed medication line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    /// Generated storage identifier; never business-visible.
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Owning order number; must equal the parent order's number.
    #[serde(rename = "numeroOrden")]
    pub order_number: i32,

    /// Position within the order, unique across all item kinds.
    #[serde(rename = "numeroItem")]
    pub item_number: i32,

    /// Clinical catalog reference; required, non-empty.
    #[serde(rename = "catalogoId")]
    pub catalog_id: String,

    #[serde(rename = "dosis")]
    pub dose: String,

    /// Treatment duration in days.
    #[serde(rename = "duracionTratamiento")]
    pub treatment_duration: i32,
}

impl Medication {
    /// Creates a medication with a freshly generated storage identifier.
    pub fn new(
        order_number: i32,
        item_number: i32,
        catalog_id: impl Into<String>,
        dose: impl Into<String>,
        treatment_duration: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_number,
            item_number,
            catalog_id: catalog_id.into(),
            dose: dose.into(),
            treatment_duration,
        }
    }
}

/// A prescribed procedure line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Procedure {
    /// Generated storage identifier; never business-visible.
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Owning order number; must equal the parent order's number.
    #[serde(rename = "numeroOrden")]
    pub order_number: i32,

    /// Position within the order, unique across all item kinds.
    #[serde(rename = "numeroItem")]
    pub item_number: i32,

    /// Clinical catalog reference; required, non-empty.
    #[serde(rename = "catalogoId")]
    pub catalog_id: String,

    #[serde(rename = "numeroVecesRepite")]
    pub repeat_count: i32,

    #[serde(rename = "frecuencia")]
    pub frequency: String,
}

impl Procedure {
    /// Creates a procedure with a freshly generated storage identifier.
    pub fn new(
        order_number: i32,
        item_number: i32,
        catalog_id: impl Into<String>,
        repeat_count: i32,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_number,
            item_number,
            catalog_id: catalog_id.into(),
            repeat_count,
            frequency: frequency.into(),
        }
    }
}

/// A diagnostic-aid line item (imaging, lab work, supplies).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticAid {
    /// Generated storage identifier; never business-visible.
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Owning order number; must equal the parent order's number.
    #[serde(rename = "numeroOrden")]
    pub order_number: i32,

    /// Position within the order, unique across all item kinds.
    #[serde(rename = "numeroItem")]
    pub item_number: i32,

    /// Clinical catalog reference; required, non-empty.
    #[serde(rename = "catalogoId")]
    pub catalog_id: String,

    #[serde(rename = "cantidad")]
    pub quantity: i32,
}

impl DiagnosticAid {
    /// Creates a diagnostic aid with a freshly generated storage identifier.
    pub fn new(
        order_number: i32,
        item_number: i32,
        catalog_id: impl Into<String>,
        quantity: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_number,
            item_number,
            catalog_id: catalog_id.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medication_round_trips_wire_names() {
        let json = r#"{
            "numeroOrden": 5,
            "numeroItem": 1,
            "catalogoId": "MED-001",
            "dosis": "500mg",
            "duracionTratamiento": 7
        }"#;
        let medication: Medication = serde_json::from_str(json).unwrap();
        assert_eq!(medication.order_number, 5);
        assert_eq!(medication.catalog_id, "MED-001");

        let value = serde_json::to_value(&medication).unwrap();
        assert!(value.get("duracionTratamiento").is_some());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn diagnostic_aid_carries_quantity() {
        let json = r#"{"numeroOrden":5,"numeroItem":2,"catalogoId":"AYD-9","cantidad":3}"#;
        let aid: DiagnosticAid = serde_json::from_str(json).unwrap();
        assert_eq!(aid.quantity, 3);
    }
}
