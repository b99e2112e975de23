//! Business-rule validation engine.
//!
//! An order and its candidate line items are validated by an ordered list
//! of rules. Each rule is a pure function from a [`ValidationContext`] to
//! an [`ErrorMap`]; the [`OrderValidator`] runs the rules in registration
//! order and merges their output, so message order is deterministic for a
//! fixed rule list.
//!
//! The rule set is closed and small: one rule for cross-kind item
//! uniqueness and numbering, one association rule per item kind, and the
//! hospitalization consistency rule. Rules are plain values registered
//! explicitly; there is no discovery mechanism.

pub mod context;
pub mod hospitalization;
pub mod linked;
pub mod unique_items;
pub mod validator;

mod report;

pub use context::ValidationContext;
pub use hospitalization::HospitalizationRule;
pub use linked::{DiagnosticAidsLinkedRule, MedicationsLinkedRule, ProceduresLinkedRule};
pub use unique_items::UniqueItemsRule;
pub use validator::OrderValidator;

use crate::domain::ErrorMap;

/// A single business rule.
///
/// Evaluation must be pure with respect to the context: no mutation, no
/// I/O, and no panics for well-formed contexts. The name is used for
/// selective re-running and diagnostics.
pub trait ValidationRule: Send + Sync {
    /// Display name, unique within a validator.
    fn name(&self) -> &str;

    /// Checks the rule against the context, returning any violations.
    fn evaluate(&self, context: &ValidationContext) -> ErrorMap;
}
