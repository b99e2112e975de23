//! Ordered rule list and result aggregation.

use crate::domain::ErrorMap;
use crate::rules::{
    DiagnosticAidsLinkedRule, HospitalizationRule, MedicationsLinkedRule, ProceduresLinkedRule,
    UniqueItemsRule, ValidationContext, ValidationRule,
};

/// Runs business rules against a [`ValidationContext`].
///
/// Rules run in registration order and their error maps are merged by
/// appending, so the order of the list is visible in the merged messages.
/// Callers that need deterministic output should use
/// [`OrderValidator::with_default_rules`] or pass their own fixed list.
pub struct OrderValidator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl OrderValidator {
    /// Creates a validator over an explicit rule list.
    pub fn new(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    /// The standard rule set in its canonical order: cross-kind
    /// uniqueness first, then the three association rules, then the
    /// hospitalization check.
    pub fn with_default_rules() -> Self {
        Self::new(vec![
            Box::new(UniqueItemsRule),
            Box::new(MedicationsLinkedRule),
            Box::new(ProceduresLinkedRule),
            Box::new(DiagnosticAidsLinkedRule),
            Box::new(HospitalizationRule),
        ])
    }

    /// Runs every rule and merges the results into one map.
    pub fn evaluate_all(&self, context: &ValidationContext) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for rule in &self.rules {
            errors.merge(rule.evaluate(context));
        }
        errors
    }

    /// Runs the single rule whose name matches, case-insensitively.
    ///
    /// Returns an empty map when the name is blank or no rule matches;
    /// an unknown rule name is not an error.
    pub fn evaluate_rule(&self, context: &ValidationContext, name: &str) -> ErrorMap {
        if name.trim().is_empty() {
            return ErrorMap::new();
        }

        let wanted = name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.name().to_lowercase() == wanted)
            .map(|rule| rule.evaluate(context))
            .unwrap_or_default()
    }

    /// Registered rule names, in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}

impl Default for OrderValidator {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
