//! Storage abstraction traits.
//!
//! One trait per entity kind, mirroring the collection-per-kind layout of
//! the backing store. Implementations must enforce the uniqueness
//! constraints (`numeroOrden` for orders, `(numeroOrden, numeroItem)` for
//! line items) so that racing writers are rejected at this layer even when
//! an advisory pre-check passed.

use crate::domain::{DiagnosticAid, Medication, Order, Procedure, StorageResult};
use async_trait::async_trait;

/// Order header collection.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Every stored order.
    async fn find_all(&self) -> StorageResult<Vec<Order>>;

    /// Looks an order up by its business key.
    async fn find_by_order_number(&self, order_number: i32) -> StorageResult<Option<Order>>;

    /// Every order issued for the given patient cédula.
    async fn find_by_patient(&self, patient_id: &str) -> StorageResult<Vec<Order>>;

    /// Inserts a new order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DuplicateKey`](crate::domain::StorageError)
    /// when an order with the same number already exists.
    async fn insert(&self, order: &Order) -> StorageResult<()>;

    /// Replaces the order with the given number, if present.
    async fn replace(&self, order_number: i32, order: &Order) -> StorageResult<()>;

    /// Deletes the order with the given number; absent is not an error.
    async fn delete_by_order_number(&self, order_number: i32) -> StorageResult<()>;
}

/// Medication line-item collection.
#[async_trait]
pub trait MedicationStore: Send + Sync {
    async fn find_all(&self) -> StorageResult<Vec<Medication>>;

    async fn find_by_order_number(&self, order_number: i32) -> StorageResult<Vec<Medication>>;

    async fn find_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<Option<Medication>>;

    /// Inserts a new medication; duplicate `(numeroOrden, numeroItem)` is
    /// rejected.
    async fn insert(&self, medication: &Medication) -> StorageResult<()>;

    async fn replace(
        &self,
        order_number: i32,
        item_number: i32,
        medication: &Medication,
    ) -> StorageResult<()>;

    async fn delete_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<()>;

    /// Removes every medication belonging to the order.
    async fn delete_all_by_order_number(&self, order_number: i32) -> StorageResult<()>;
}

/// Procedure line-item collection.
#[async_trait]
pub trait ProcedureStore: Send + Sync {
    async fn find_all(&self) -> StorageResult<Vec<Procedure>>;

    async fn find_by_order_number(&self, order_number: i32) -> StorageResult<Vec<Procedure>>;

    async fn find_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<Option<Procedure>>;

    /// Inserts a new procedure; duplicate `(numeroOrden, numeroItem)` is
    /// rejected.
    async fn insert(&self, procedure: &Procedure) -> StorageResult<()>;

    async fn replace(
        &self,
        order_number: i32,
        item_number: i32,
        procedure: &Procedure,
    ) -> StorageResult<()>;

    async fn delete_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<()>;

    /// Removes every procedure belonging to the order.
    async fn delete_all_by_order_number(&self, order_number: i32) -> StorageResult<()>;
}

/// Diagnostic-aid line-item collection.
#[async_trait]
pub trait DiagnosticAidStore: Send + Sync {
    async fn find_all(&self) -> StorageResult<Vec<DiagnosticAid>>;

    async fn find_by_order_number(&self, order_number: i32) -> StorageResult<Vec<DiagnosticAid>>;

    async fn find_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<Option<DiagnosticAid>>;

    /// Inserts a new diagnostic aid; duplicate `(numeroOrden, numeroItem)`
    /// is rejected.
    async fn insert(&self, diagnostic_aid: &DiagnosticAid) -> StorageResult<()>;

    async fn replace(
        &self,
        order_number: i32,
        item_number: i32,
        diagnostic_aid: &DiagnosticAid,
    ) -> StorageResult<()>;

    async fn delete_by_order_and_item(
        &self,
        order_number: i32,
        item_number: i32,
    ) -> StorageResult<()>;

    /// Removes every diagnostic aid belonging to the order.
    async fn delete_all_by_order_number(&self, order_number: i32) -> StorageResult<()>;
}
