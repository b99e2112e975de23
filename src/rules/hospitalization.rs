//! Hospitalization consistency rule.

use crate::domain::ErrorMap;
use crate::rules::{ValidationContext, ValidationRule};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// An order that hospitalizes the patient must also plan the stay.
///
/// A procedure counts as a hospitalization when its catalog id, after
/// diacritic-insensitive normalization, contains the substring
/// `"hospital"`. When at least one matches, the order needs a second
/// procedure (nursing visits and the like) and at least one medication.
pub struct HospitalizationRule;

impl ValidationRule for HospitalizationRule {
    fn name(&self) -> &str {
        "Hospitalización como procedimiento"
    }

    fn evaluate(&self, context: &ValidationContext) -> ErrorMap {
        let mut errors = ErrorMap::new();
        let procedures = context.procedures();

        if procedures.is_empty() {
            return errors;
        }

        let order_number = context.order().order_number;
        let any_hospitalization = procedures
            .iter()
            .any(|p| is_hospitalization_catalog(&p.catalog_id));

        if !any_hospitalization {
            return errors;
        }

        if procedures.len() < 2 {
            errors.push(
                "procedimientos",
                format!(
                    "La orden {order_number} incluye una hospitalización, pero no detalla procedimientos adicionales (por ejemplo, visitas de enfermería). Añade los procedimientos requeridos."
                ),
            );
        }

        if context.medications().is_empty() {
            errors.push(
                "medicamentos",
                format!(
                    "La orden {order_number} con hospitalización debe registrar los medicamentos y sus indicaciones para la estancia."
                ),
            );
        }

        errors
    }
}

fn is_hospitalization_catalog(catalog_id: &str) -> bool {
    normalize(catalog_id).contains("hospital")
}

/// Decomposes to NFD, drops combining marks and lowercases, so
/// "HOSPITALIZACIÓN" and "hospitalizacion" compare equal.
fn normalize(value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }

    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Medication, Order, OrderStatus, Procedure};
    use chrono::Utc;
    use test_case::test_case;

    fn context(medications: Vec<Medication>, procedures: Vec<Procedure>) -> ValidationContext {
        let order = Order::new(30, "123", "456", Utc::now(), OrderStatus::Pendiente);
        ValidationContext::new(order, medications, procedures, Vec::new())
    }

    #[test_case("HOSPITALIZACIÓN" ; "uppercase with accent")]
    #[test_case("hospitalizacion" ; "lowercase without accent")]
    #[test_case("Hospitalización domiciliaria" ; "embedded in a longer label")]
    fn catalog_matches_diacritic_insensitively(catalog_id: &str) {
        assert!(is_hospitalization_catalog(catalog_id));
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "blank")]
    #[test_case("CIRUGÍA" ; "unrelated catalog")]
    fn catalog_does_not_match(catalog_id: &str) {
        assert!(!is_hospitalization_catalog(catalog_id));
    }

    #[test]
    fn no_procedures_is_a_no_op() {
        let errors = HospitalizationRule.evaluate(&context(Vec::new(), Vec::new()));
        assert!(errors.is_empty());
    }

    #[test]
    fn non_hospitalization_procedures_are_a_no_op() {
        let ctx = context(Vec::new(), vec![Procedure::new(30, 1, "CURACIÓN", 1, "")]);
        assert!(HospitalizationRule.evaluate(&ctx).is_empty());
    }

    #[test]
    fn lone_hospitalization_without_medications_reports_both_fields() {
        let ctx = context(
            Vec::new(),
            vec![Procedure::new(30, 1, "HOSPITALIZACIÓN", 1, "")],
        );
        let errors = HospitalizationRule.evaluate(&ctx);
        assert_eq!(errors.messages("procedimientos").unwrap().len(), 1);
        assert_eq!(errors.messages("medicamentos").unwrap().len(), 1);
    }

    #[test]
    fn accompanied_hospitalization_with_medications_passes() {
        let ctx = context(
            vec![Medication::new(30, 1, "MED-1", "10mg", 5)],
            vec![
                Procedure::new(30, 2, "hospitalizacion", 1, ""),
                Procedure::new(30, 3, "VISITA ENFERMERÍA", 3, "diaria"),
            ],
        );
        assert!(HospitalizationRule.evaluate(&ctx).is_empty());
    }
}
