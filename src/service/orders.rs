//! Order-creation workflow and order queries.
//!
//! Creation runs in three strictly sequential phases:
//!
//! 1. **Build** - materialize the order and its line items from the
//!    request, trimming strings and defaulting the timestamp and status.
//! 2. **Validate** - structural checks (order-number collision, cédula
//!    format, catalog ids) merged with the business-rule engine. Any
//!    violation fails fast with the merged error map; nothing is written.
//! 3. **Commit** - ordered writes (order, medications, procedures,
//!    diagnostic aids). A failed write triggers compensating deletes over
//!    the collections written so far, in reverse order, and the original
//!    failure is surfaced.
//!
//! The pre-check on the order number is advisory: a concurrent creation
//! of the same number can slip past it and is then rejected by the
//! store's uniqueness constraint at insert time.

use crate::domain::{
    CreateOrderError, CreateOrderRequest, DiagnosticAid, DiagnosticAidEntry, ErrorMap, Medication,
    MedicationEntry, Order, OrderDetail, Procedure, ProcedureEntry, StorageError, StorageResult,
};
use crate::rules::{OrderValidator, ValidationContext};
use crate::storage::{DiagnosticAidStore, MedicationStore, OrderStore, ProcedureStore};
use chrono::Utc;
use std::sync::Arc;

/// The collections touched during commit, in write order.
///
/// Compensation walks the executed prefix of this sequence in reverse, so
/// the order header is always the last thing deleted and collections that
/// were never reached receive no delete at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommitStep {
    Order,
    Medications,
    Procedures,
    DiagnosticAids,
}

const COMMIT_SEQUENCE: [CommitStep; 4] = [
    CommitStep::Order,
    CommitStep::Medications,
    CommitStep::Procedures,
    CommitStep::DiagnosticAids,
];

/// Orchestrates order reads, creation and header updates.
pub struct OrderService {
    orders: Arc<dyn OrderStore>,
    medications: Arc<dyn MedicationStore>,
    procedures: Arc<dyn ProcedureStore>,
    diagnostic_aids: Arc<dyn DiagnosticAidStore>,
    validator: OrderValidator,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        medications: Arc<dyn MedicationStore>,
        procedures: Arc<dyn ProcedureStore>,
        diagnostic_aids: Arc<dyn DiagnosticAidStore>,
        validator: OrderValidator,
    ) -> Self {
        Self {
            orders,
            medications,
            procedures,
            diagnostic_aids,
            validator,
        }
    }

    /// Every order with its line items.
    pub async fn get_all(&self) -> StorageResult<Vec<OrderDetail>> {
        let orders = self.orders.find_all().await?;
        futures::future::try_join_all(orders.into_iter().map(|o| self.build_detail(o))).await
    }

    /// One order with its line items, by order number.
    pub async fn get_by_order_number(
        &self,
        order_number: i32,
    ) -> StorageResult<Option<OrderDetail>> {
        match self.orders.find_by_order_number(order_number).await? {
            Some(order) => Ok(Some(self.build_detail(order).await?)),
            None => Ok(None),
        }
    }

    /// Every order issued for a patient cédula, with line items.
    pub async fn get_by_patient(&self, patient_id: &str) -> StorageResult<Vec<OrderDetail>> {
        let orders = self.orders.find_by_patient(patient_id).await?;
        futures::future::try_join_all(orders.into_iter().map(|o| self.build_detail(o))).await
    }

    /// Creates an order and its line items.
    ///
    /// Returns the persisted detail on success. A
    /// [`CreateOrderError::Rejected`] carries the full field → messages
    /// map and guarantees nothing was written; a
    /// [`CreateOrderError::Storage`] means a write failed during commit
    /// and compensation already ran.
    pub async fn create(
        &self,
        request: CreateOrderRequest,
    ) -> Result<OrderDetail, CreateOrderError> {
        let order = build_order(&request);
        let order_number = order.order_number;

        let medications: Vec<Medication> = request
            .medications
            .iter()
            .map(|entry| build_medication(order_number, entry))
            .collect();
        let procedures: Vec<Procedure> = request
            .procedures
            .iter()
            .map(|entry| build_procedure(order_number, entry))
            .collect();
        let diagnostic_aids: Vec<DiagnosticAid> = request
            .diagnostic_aids
            .iter()
            .map(|entry| build_diagnostic_aid(order_number, entry))
            .collect();

        let mut errors = self.validate_new_order(&order).await?;
        check_catalogs(
            order_number,
            &medications,
            &procedures,
            &diagnostic_aids,
            &mut errors,
        );

        let context = ValidationContext::new(
            order.clone(),
            medications.clone(),
            procedures.clone(),
            diagnostic_aids.clone(),
        );
        errors.merge(self.validator.evaluate_all(&context));

        if !errors.is_empty() {
            tracing::info!(
                numero_orden = order_number,
                fields = errors.len(),
                "order rejected by validation"
            );
            return Err(CreateOrderError::Rejected(errors));
        }

        self.commit(&order, &medications, &procedures, &diagnostic_aids)
            .await?;

        tracing::info!(
            numero_orden = order_number,
            medicamentos = medications.len(),
            procedimientos = procedures.len(),
            ayudas = diagnostic_aids.len(),
            "order created"
        );

        Ok(to_detail(order, medications, procedures, diagnostic_aids))
    }

    /// Replaces the order header, leaving line items untouched.
    ///
    /// Returns `false` when no order has the given number. The stored
    /// internal id and the path order number always win over whatever the
    /// payload carried; business rules are not re-run.
    pub async fn update_header(
        &self,
        order_number: i32,
        mut updated: Order,
    ) -> StorageResult<bool> {
        let Some(existing) = self.orders.find_by_order_number(order_number).await? else {
            return Ok(false);
        };

        updated.id = existing.id;
        updated.order_number = order_number;
        self.orders.replace(order_number, &updated).await?;

        tracing::info!(numero_orden = order_number, "order header updated");
        Ok(true)
    }

    async fn build_detail(&self, order: Order) -> StorageResult<OrderDetail> {
        let order_number = order.order_number;
        // The three item fetches only read; run them concurrently.
        let (medications, procedures, diagnostic_aids) = tokio::try_join!(
            self.medications.find_by_order_number(order_number),
            self.procedures.find_by_order_number(order_number),
            self.diagnostic_aids.find_by_order_number(order_number),
        )?;
        Ok(to_detail(order, medications, procedures, diagnostic_aids))
    }

    async fn validate_new_order(&self, order: &Order) -> StorageResult<ErrorMap> {
        let mut errors = ErrorMap::new();

        if self
            .orders
            .find_by_order_number(order.order_number)
            .await?
            .is_some()
        {
            errors.push(
                "numeroOrden",
                format!("La orden con número {} ya existe.", order.order_number),
            );
        }

        check_cedula(&mut errors, "cedulaPaciente", &order.patient_id);
        check_cedula(&mut errors, "cedulaMedico", &order.practitioner_id);

        Ok(errors)
    }

    async fn commit(
        &self,
        order: &Order,
        medications: &[Medication],
        procedures: &[Procedure],
        diagnostic_aids: &[DiagnosticAid],
    ) -> StorageResult<()> {
        let mut executed: Vec<CommitStep> = Vec::with_capacity(COMMIT_SEQUENCE.len());

        for step in COMMIT_SEQUENCE {
            executed.push(step);
            let result = match step {
                CommitStep::Order => self.orders.insert(order).await,
                CommitStep::Medications => self.insert_medications(medications).await,
                CommitStep::Procedures => self.insert_procedures(procedures).await,
                CommitStep::DiagnosticAids => self.insert_diagnostic_aids(diagnostic_aids).await,
            };

            if let Err(original) = result {
                return Err(self
                    .compensate(&executed, order.order_number, original)
                    .await);
            }
        }

        Ok(())
    }

    async fn insert_medications(&self, medications: &[Medication]) -> StorageResult<()> {
        for medication in medications {
            self.medications.insert(medication).await?;
        }
        Ok(())
    }

    async fn insert_procedures(&self, procedures: &[Procedure]) -> StorageResult<()> {
        for procedure in procedures {
            self.procedures.insert(procedure).await?;
        }
        Ok(())
    }

    async fn insert_diagnostic_aids(&self, diagnostic_aids: &[DiagnosticAid]) -> StorageResult<()> {
        for diagnostic_aid in diagnostic_aids {
            self.diagnostic_aids.insert(diagnostic_aid).await?;
        }
        Ok(())
    }

    /// Deletes whatever the executed commit steps may have written, last
    /// step first, then returns the original failure. A failed delete
    /// aborts the walk and both causes are returned together; the order
    /// is then partially persisted and there is no further recovery here.
    async fn compensate(
        &self,
        executed: &[CommitStep],
        order_number: i32,
        original: StorageError,
    ) -> StorageError {
        tracing::warn!(
            numero_orden = order_number,
            error = %original,
            steps = executed.len(),
            "commit failed, rolling back written collections"
        );

        for step in executed.iter().rev() {
            let result = match step {
                CommitStep::Medications => {
                    self.medications.delete_all_by_order_number(order_number).await
                }
                CommitStep::Procedures => {
                    self.procedures.delete_all_by_order_number(order_number).await
                }
                CommitStep::DiagnosticAids => {
                    self.diagnostic_aids
                        .delete_all_by_order_number(order_number)
                        .await
                }
                CommitStep::Order => self.orders.delete_by_order_number(order_number).await,
            };

            if let Err(compensation) = result {
                tracing::error!(
                    numero_orden = order_number,
                    error = %compensation,
                    "compensating delete failed, order left partially persisted"
                );
                return StorageError::RollbackFailed {
                    original: Box::new(original),
                    compensation: Box::new(compensation),
                };
            }
        }

        original
    }
}

fn build_order(request: &CreateOrderRequest) -> Order {
    Order::new(
        request.order_number,
        request.patient_id.trim(),
        request.practitioner_id.trim(),
        request.created_at.unwrap_or_else(Utc::now),
        request.status,
    )
}

fn build_medication(order_number: i32, entry: &MedicationEntry) -> Medication {
    Medication::new(
        order_number,
        entry.item_number,
        entry.catalog_id.trim(),
        entry.dose.trim(),
        entry.treatment_duration,
    )
}

fn build_procedure(order_number: i32, entry: &ProcedureEntry) -> Procedure {
    Procedure::new(
        order_number,
        entry.item_number,
        entry.catalog_id.trim(),
        entry.repeat_count,
        entry.frequency.trim(),
    )
}

fn build_diagnostic_aid(order_number: i32, entry: &DiagnosticAidEntry) -> DiagnosticAid {
    DiagnosticAid::new(
        order_number,
        entry.item_number,
        entry.catalog_id.trim(),
        entry.quantity,
    )
}

fn check_cedula(errors: &mut ErrorMap, field: &str, value: &str) {
    let label = if field == "cedulaPaciente" {
        "La cédula del paciente"
    } else {
        "La cédula del médico"
    };

    let normalized = value.trim();
    if normalized.is_empty() {
        errors.push(field, format!("{label} es obligatoria."));
        return;
    }

    if normalized.chars().count() > 10 {
        errors.push(field, format!("{label} debe tener máximo 10 caracteres."));
    }
}

fn check_catalogs(
    order_number: i32,
    medications: &[Medication],
    procedures: &[Procedure],
    diagnostic_aids: &[DiagnosticAid],
    errors: &mut ErrorMap,
) {
    for medication in medications.iter().filter(|m| m.catalog_id.trim().is_empty()) {
        errors.push(
            "catalogoId",
            format!(
                "El medicamento con ítem {} en la orden {} debe indicar un catalogoId válido.",
                medication.item_number, order_number
            ),
        );
    }

    for procedure in procedures.iter().filter(|p| p.catalog_id.trim().is_empty()) {
        errors.push(
            "catalogoId",
            format!(
                "El procedimiento con ítem {} en la orden {} debe indicar un catalogoId válido.",
                procedure.item_number, order_number
            ),
        );
    }

    for aid in diagnostic_aids
        .iter()
        .filter(|a| a.catalog_id.trim().is_empty())
    {
        errors.push(
            "catalogoId",
            format!(
                "La ayuda diagnóstica con ítem {} en la orden {} debe indicar un catalogoId válido.",
                aid.item_number, order_number
            ),
        );
    }
}

fn to_detail(
    order: Order,
    mut medications: Vec<Medication>,
    mut procedures: Vec<Procedure>,
    mut diagnostic_aids: Vec<DiagnosticAid>,
) -> OrderDetail {
    medications.sort_by_key(|m| m.item_number);
    procedures.sort_by_key(|p| p.item_number);
    diagnostic_aids.sort_by_key(|a| a.item_number);

    OrderDetail {
        order_number: order.order_number,
        patient_id: order.patient_id,
        practitioner_id: order.practitioner_id,
        created_at: order.created_at,
        status: order.status,
        medications: medications
            .into_iter()
            .map(|m| MedicationEntry {
                item_number: m.item_number,
                catalog_id: m.catalog_id,
                dose: m.dose,
                treatment_duration: m.treatment_duration,
            })
            .collect(),
        procedures: procedures
            .into_iter()
            .map(|p| ProcedureEntry {
                item_number: p.item_number,
                catalog_id: p.catalog_id,
                repeat_count: p.repeat_count,
                frequency: p.frequency,
            })
            .collect(),
        diagnostic_aids: diagnostic_aids
            .into_iter()
            .map(|a| DiagnosticAidEntry {
                item_number: a.item_number,
                catalog_id: a.catalog_id,
                quantity: a.quantity,
            })
            .collect(),
    }
}
