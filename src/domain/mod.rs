//! Domain models and types.
//!
//! The domain layer provides:
//! - **Entities** ([`Order`], [`Medication`], [`Procedure`], [`DiagnosticAid`])
//! - **Wire shapes** ([`CreateOrderRequest`], [`OrderDetail`] and the entry types)
//! - **Error types** ([`OrdenesError`], [`StorageError`], [`CreateOrderError`])
//! - **Validation output** ([`ErrorMap`], insertion-ordered field → messages)
//! - **Result aliases** ([`Result`], [`StorageResult`])
//!
//! Identity: the order number is the natural business key; every entity
//! also carries a generated `Uuid` that backs storage and is never exposed
//! through the API.

pub mod dto;
pub mod error_map;
pub mod errors;
pub mod items;
pub mod order;
pub mod result;

pub use dto::{
    CreateOrderRequest, DiagnosticAidEntry, MedicationEntry, OrderDetail, ProcedureEntry,
};
pub use error_map::ErrorMap;
pub use errors::{CreateOrderError, OrdenesError, StorageError};
pub use items::{DiagnosticAid, Medication, Procedure};
pub use order::{Order, OrderStatus};
pub use result::{Result, StorageResult};
