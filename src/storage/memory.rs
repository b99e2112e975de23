//! In-memory store implementations.
//!
//! Backing storage for the service binary and the test suites. Each store
//! keeps its rows behind a `tokio::sync::RwLock` and enforces the same
//! uniqueness constraints a document database would via unique indexes:
//! `numeroOrden` for orders, `(numeroOrden, numeroItem)` per line-item
//! collection.

use crate::domain::{DiagnosticAid, Medication, Order, Procedure, StorageError, StorageResult};
use crate::storage::traits::{DiagnosticAidStore, MedicationStore, OrderStore, ProcedureStore};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory order collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    rows: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn find_all(&self) -> StorageResult<Vec<Order>> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_order_number(&self, order_number: i32) -> StorageResult<Option<Order>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|o| o.order_number == order_number)
            .cloned())
    }

    async fn find_by_patient(&self, patient_id: &str) -> StorageResult<Vec<Order>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|o| o.patient_id == patient_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, order: &Order) -> StorageResult<()> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|o| o.order_number == order.order_number) {
            return Err(StorageError::DuplicateKey(format!(
                "numeroOrden {}",
                order.order_number
            )));
        }
        rows.push(order.clone());
        Ok(())
    }

    async fn replace(&self, order_number: i32, order: &Order) -> StorageResult<()> {
        let mut rows = self.rows.write().await;
        if let Some(existing) = rows.iter_mut().find(|o| o.order_number == order_number) {
            *existing = order.clone();
        }
        Ok(())
    }

    async fn delete_by_order_number(&self, order_number: i32) -> StorageResult<()> {
        self.rows
            .write()
            .await
            .retain(|o| o.order_number != order_number);
        Ok(())
    }
}

/// In-memory medication collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMedicationStore {
    rows: Arc<RwLock<Vec<Medication>>>,
}

impl InMemoryMedicationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MedicationStore for InMemoryMedicationStore {
    async fn find_all(&self) -> StorageResult<Vec<Medication>> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_order_number(&self, order_number: i32) -> StorageResult<Vec<Medication>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|m| m.order_number == order_number)
            .cloned()
            .collect())
    }

    async fn find_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<Option<Medication>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|m| m.order_number == order_number && m.item_number == item_number)
            .cloned())
    }

    async fn insert(&self, medication: &Medication) -> StorageResult<()> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|m| {
            m.order_number == medication.order_number && m.item_number == medication.item_number
        }) {
            return Err(StorageError::DuplicateKey(format!(
                "medicamento (numeroOrden {}, numeroItem {})",
                medication.order_number, medication.item_number
            )));
        }
        rows.push(medication.clone());
        Ok(())
    }

    async fn replace(
        &self,
        order_number: i32,
        item_number: i32,
        medication: &Medication,
    ) -> StorageResult<()> {
        let mut rows = self.rows.write().await;
        if let Some(existing) = rows
            .iter_mut()
            .find(|m| m.order_number == order_number && m.item_number == item_number)
        {
            *existing = medication.clone();
        }
        Ok(())
    }

    async fn delete_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<()> {
        self.rows
            .write()
            .await
            .retain(|m| !(m.order_number == order_number && m.item_number == item_number));
        Ok(())
    }

    async fn delete_all_by_order_number(&self, order_number: i32) -> StorageResult<()> {
        self.rows
            .write()
            .await
            .retain(|m| m.order_number != order_number);
        Ok(())
    }
}

/// In-memory procedure collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProcedureStore {
    rows: Arc<RwLock<Vec<Procedure>>>,
}

impl InMemoryProcedureStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProcedureStore for InMemoryProcedureStore {
    async fn find_all(&self) -> StorageResult<Vec<Procedure>> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_order_number(&self, order_number: i32) -> StorageResult<Vec<Procedure>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|p| p.order_number == order_number)
            .cloned()
            .collect())
    }

    async fn find_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<Option<Procedure>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|p| p.order_number == order_number && p.item_number == item_number)
            .cloned())
    }

    async fn insert(&self, procedure: &Procedure) -> StorageResult<()> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|p| {
            p.order_number == procedure.order_number && p.item_number == procedure.item_number
        }) {
            return Err(StorageError::DuplicateKey(format!(
                "procedimiento (numeroOrden {}, numeroItem {})",
                procedure.order_number, procedure.item_number
            )));
        }
        rows.push(procedure.clone());
        Ok(())
    }

    async fn replace(
        &self,
        order_number: i32,
        item_number: i32,
        procedure: &Procedure,
    ) -> StorageResult<()> {
        let mut rows = self.rows.write().await;
        if let Some(existing) = rows
            .iter_mut()
            .find(|p| p.order_number == order_number && p.item_number == item_number)
        {
            *existing = procedure.clone();
        }
        Ok(())
    }

    async fn delete_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<()> {
        self.rows
            .write()
            .await
            .retain(|p| !(p.order_number == order_number && p.item_number == item_number));
        Ok(())
    }

    async fn delete_all_by_order_number(&self, order_number: i32) -> StorageResult<()> {
        self.rows
            .write()
            .await
            .retain(|p| p.order_number != order_number);
        Ok(())
    }
}

/// In-memory diagnostic-aid collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDiagnosticAidStore {
    rows: Arc<RwLock<Vec<DiagnosticAid>>>,
}

impl InMemoryDiagnosticAidStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DiagnosticAidStore for InMemoryDiagnosticAidStore {
    async fn find_all(&self) -> StorageResult<Vec<DiagnosticAid>> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_order_number(&self, order_number: i32) -> StorageResult<Vec<DiagnosticAid>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|a| a.order_number == order_number)
            .cloned()
            .collect())
    }

    async fn find_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<Option<DiagnosticAid>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|a| a.order_number == order_number && a.item_number == item_number)
            .cloned())
    }

    async fn insert(&self, diagnostic_aid: &DiagnosticAid) -> StorageResult<()> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|a| {
            a.order_number == diagnostic_aid.order_number
                && a.item_number == diagnostic_aid.item_number
        }) {
            return Err(StorageError::DuplicateKey(format!(
                "ayuda diagnóstica (numeroOrden {}, numeroItem {})",
                diagnostic_aid.order_number, diagnostic_aid.item_number
            )));
        }
        rows.push(diagnostic_aid.clone());
        Ok(())
    }

    async fn replace(
        &self,
        order_number: i32,
        item_number: i32,
        diagnostic_aid: &DiagnosticAid,
    ) -> StorageResult<()> {
        let mut rows = self.rows.write().await;
        if let Some(existing) = rows
            .iter_mut()
            .find(|a| a.order_number == order_number && a.item_number == item_number)
        {
            *existing = diagnostic_aid.clone();
        }
        Ok(())
    }

    async fn delete_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<()> {
        self.rows
            .write()
            .await
            .retain(|a| !(a.order_number == order_number && a.item_number == item_number));
        Ok(())
    }

    async fn delete_all_by_order_number(&self, order_number: i32) -> StorageResult<()> {
        self.rows
            .write()
            .await
            .retain(|a| a.order_number != order_number);
        Ok(())
    }
}
