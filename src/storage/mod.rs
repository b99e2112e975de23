//! Persistence seam.
//!
//! The service only speaks to storage through the traits in
//! [`traits`]; the [`memory`] module provides the in-memory
//! implementation used by the binary and the test suites. A document
//! database client would implement the same four traits.

pub mod memory;
pub mod traits;

pub use memory::{
    InMemoryDiagnosticAidStore, InMemoryMedicationStore, InMemoryOrderStore,
    InMemoryProcedureStore,
};
pub use traits::{DiagnosticAidStore, MedicationStore, OrderStore, ProcedureStore};
