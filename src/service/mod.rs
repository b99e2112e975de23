//! Application services.
//!
//! [`OrderService`] owns the order-creation workflow (build, validate,
//! commit with compensation) and the order queries; the item services are
//! thin reads over their collections.

pub mod items;
pub mod orders;

pub use items::{DiagnosticAidService, MedicationService, ProcedureService};
pub use orders::OrderService;
