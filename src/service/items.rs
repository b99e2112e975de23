//! Thin read services for the line-item collections.

use crate::domain::{DiagnosticAid, Medication, Procedure, StorageResult};
use crate::storage::{DiagnosticAidStore, MedicationStore, ProcedureStore};
use std::sync::Arc;

/// Read access to the medication collection.
pub struct MedicationService {
    store: Arc<dyn MedicationStore>,
}

impl MedicationService {
    pub fn new(store: Arc<dyn MedicationStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> StorageResult<Vec<Medication>> {
        self.store.find_all().await
    }

    pub async fn get_by_order_number(&self, order_number: i32) -> StorageResult<Vec<Medication>> {
        self.store.find_by_order_number(order_number).await
    }

    pub async fn get_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<Option<Medication>> {
        self.store
            .find_by_order_and_item(order_number, item_number)
            .await
    }
}

/// Read access to the procedure collection.
pub struct ProcedureService {
    store: Arc<dyn ProcedureStore>,
}

impl ProcedureService {
    pub fn new(store: Arc<dyn ProcedureStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> StorageResult<Vec<Procedure>> {
        self.store.find_all().await
    }

    pub async fn get_by_order_number(&self, order_number: i32) -> StorageResult<Vec<Procedure>> {
        self.store.find_by_order_number(order_number).await
    }

    pub async fn get_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<Option<Procedure>> {
        self.store
            .find_by_order_and_item(order_number, item_number)
            .await
    }
}

/// Read access to the diagnostic-aid collection.
pub struct DiagnosticAidService {
    store: Arc<dyn DiagnosticAidStore>,
}

impl DiagnosticAidService {
    pub fn new(store: Arc<dyn DiagnosticAidStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> StorageResult<Vec<DiagnosticAid>> {
        self.store.find_all().await
    }

    pub async fn get_by_order_number(
        &self,
        order_number: i32,
    ) -> StorageResult<Vec<DiagnosticAid>> {
        self.store.find_by_order_number(order_number).await
    }

    pub async fn get_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<Option<DiagnosticAid>> {
        self.store
            .find_by_order_and_item(order_number, item_number)
            .await
    }
}
