//! Read-only snapshot handed to every rule.

use crate::domain::{DiagnosticAid, Medication, Order, Procedure};

/// Immutable bundle of one order plus its candidate line items.
///
/// Built once per validation pass. The item collections are snapshots
/// taken at construction; rules only ever borrow them. The order itself is
/// required by construction, so a context always has one.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    order: Order,
    medications: Vec<Medication>,
    procedures: Vec<Procedure>,
    diagnostic_aids: Vec<DiagnosticAid>,
}

impl ValidationContext {
    /// Creates a context from the order and its candidate items.
    pub fn new(
        order: Order,
        medications: Vec<Medication>,
        procedures: Vec<Procedure>,
        diagnostic_aids: Vec<DiagnosticAid>,
    ) -> Self {
        Self {
            order,
            medications,
            procedures,
            diagnostic_aids,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    pub fn procedures(&self) -> &[Procedure] {
        &self.procedures
    }

    pub fn diagnostic_aids(&self) -> &[DiagnosticAid] {
        &self.diagnostic_aids
    }
}
