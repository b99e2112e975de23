//! Per-kind association rules.
//!
//! One rule per line-item kind, structurally identical: every item must
//! reference the order it travels with, duplicate item numbers within the
//! kind are reported, and when the order carries no other kind of item the
//! kind's own numbering must start at 1 and be contiguous.

use crate::domain::ErrorMap;
use crate::rules::report::catalog_label;
use crate::rules::{ValidationContext, ValidationRule};
use indexmap::IndexMap;

/// Wording and error-map key for one line-item kind.
struct KindText {
    field: &'static str,
    item_subject: &'static str,
    group_subject: &'static str,
    numbering_noun: &'static str,
}

const MEDICATIONS: KindText = KindText {
    field: "medicamentos",
    item_subject: "El medicamento",
    group_subject: "Los medicamentos",
    numbering_noun: "medicamentos",
};

const PROCEDURES: KindText = KindText {
    field: "procedimientos",
    item_subject: "El procedimiento",
    group_subject: "Los procedimientos",
    numbering_noun: "procedimientos",
};

const DIAGNOSTIC_AIDS: KindText = KindText {
    field: "ayudasDiagnosticas",
    item_subject: "La ayuda diagnóstica",
    group_subject: "Las ayudas diagnósticas",
    numbering_noun: "ayudas diagnósticas",
};

/// One line item reduced to the fields the association checks need.
struct LinkedItem<'a> {
    order_number: i32,
    item_number: i32,
    catalog_id: &'a str,
}

fn evaluate_linked(
    text: &KindText,
    order_number: i32,
    items: &[LinkedItem<'_>],
    other_kinds_empty: bool,
) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if items.is_empty() {
        return errors;
    }

    for item in items.iter().filter(|i| i.order_number != order_number) {
        errors.push(
            text.field,
            format!(
                "{} {} indica el número de orden {}, pero la orden actual es {}.",
                text.item_subject,
                catalog_label(item.catalog_id),
                item.order_number,
                order_number
            ),
        );
    }

    let mut groups: IndexMap<i32, Vec<&LinkedItem<'_>>> = IndexMap::new();
    for item in items {
        groups.entry(item.item_number).or_default().push(item);
    }

    for (item_number, group) in groups.iter().filter(|(n, g)| **n > 0 && g.len() > 1) {
        let detail = group
            .iter()
            .map(|i| catalog_label(i.catalog_id))
            .collect::<Vec<_>>()
            .join(", ");
        errors.push(
            text.field,
            format!(
                "{} de la orden {} tienen el ítem {} repetido: {}.",
                text.group_subject, order_number, item_number, detail
            ),
        );
    }

    if other_kinds_empty {
        // The scan runs over every item of the kind, duplicates and
        // non-positive numbers included: each occupies a slot, so a
        // repeated number also surfaces as a gap further along.
        let mut sorted: Vec<&LinkedItem<'_>> = items.iter().collect();
        sorted.sort_by_key(|i| i.item_number);

        if sorted[0].item_number != 1 {
            errors.push(
                text.field,
                format!(
                    "{} de la orden {} deben iniciar en el ítem 1.",
                    text.group_subject, order_number
                ),
            );
        }

        for (index, item) in sorted.iter().enumerate() {
            let expected = index as i32 + 1;
            if item.item_number != expected {
                errors.push(
                    text.field,
                    format!(
                        "La numeración de {} para la orden {} presenta un salto: se esperaba el ítem {} y se encontró el {}.",
                        text.numbering_noun, order_number, expected, item.item_number
                    ),
                );
                break;
            }
        }
    }

    errors
}

/// Medications must belong to the order they travel with.
pub struct MedicationsLinkedRule;

impl ValidationRule for MedicationsLinkedRule {
    fn name(&self) -> &str {
        "Medicamentos asociados a la orden"
    }

    fn evaluate(&self, context: &ValidationContext) -> ErrorMap {
        let items: Vec<LinkedItem<'_>> = context
            .medications()
            .iter()
            .map(|m| LinkedItem {
                order_number: m.order_number,
                item_number: m.item_number,
                catalog_id: &m.catalog_id,
            })
            .collect();
        evaluate_linked(
            &MEDICATIONS,
            context.order().order_number,
            &items,
            context.procedures().is_empty() && context.diagnostic_aids().is_empty(),
        )
    }
}

/// Procedures must belong to the order they travel with.
pub struct ProceduresLinkedRule;

impl ValidationRule for ProceduresLinkedRule {
    fn name(&self) -> &str {
        "Procedimientos asociados a la orden"
    }

    fn evaluate(&self, context: &ValidationContext) -> ErrorMap {
        let items: Vec<LinkedItem<'_>> = context
            .procedures()
            .iter()
            .map(|p| LinkedItem {
                order_number: p.order_number,
                item_number: p.item_number,
                catalog_id: &p.catalog_id,
            })
            .collect();
        evaluate_linked(
            &PROCEDURES,
            context.order().order_number,
            &items,
            context.medications().is_empty() && context.diagnostic_aids().is_empty(),
        )
    }
}

/// Diagnostic aids must belong to the order they travel with.
pub struct DiagnosticAidsLinkedRule;

impl ValidationRule for DiagnosticAidsLinkedRule {
    fn name(&self) -> &str {
        "Ayudas diagnósticas asociadas a la orden"
    }

    fn evaluate(&self, context: &ValidationContext) -> ErrorMap {
        let items: Vec<LinkedItem<'_>> = context
            .diagnostic_aids()
            .iter()
            .map(|a| LinkedItem {
                order_number: a.order_number,
                item_number: a.item_number,
                catalog_id: &a.catalog_id,
            })
            .collect();
        evaluate_linked(
            &DIAGNOSTIC_AIDS,
            context.order().order_number,
            &items,
            context.medications().is_empty() && context.procedures().is_empty(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DiagnosticAid, Medication, Order, OrderStatus, Procedure};
    use chrono::Utc;

    fn context(
        medications: Vec<Medication>,
        procedures: Vec<Procedure>,
        diagnostic_aids: Vec<DiagnosticAid>,
    ) -> ValidationContext {
        let order = Order::new(20, "123", "456", Utc::now(), OrderStatus::Pendiente);
        ValidationContext::new(order, medications, procedures, diagnostic_aids)
    }

    #[test]
    fn empty_kind_is_a_no_op() {
        let ctx = context(Vec::new(), vec![Procedure::new(20, 1, "PRO-1", 1, "")], Vec::new());
        assert!(MedicationsLinkedRule.evaluate(&ctx).is_empty());
    }

    #[test]
    fn every_order_number_mismatch_is_reported() {
        let ctx = context(
            vec![
                Medication::new(99, 1, "MED-1", "", 0),
                Medication::new(98, 2, "MED-2", "", 0),
            ],
            vec![Procedure::new(20, 3, "PRO-1", 1, "")],
            Vec::new(),
        );
        let errors = MedicationsLinkedRule.evaluate(&ctx);
        let messages = errors.messages("medicamentos").unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("indica el número de orden 99"));
        assert!(messages[1].contains("indica el número de orden 98"));
    }

    #[test]
    fn duplicates_within_kind_reported_with_catalog_labels() {
        let ctx = context(
            Vec::new(),
            vec![
                Procedure::new(20, 2, "PRO-A", 1, ""),
                Procedure::new(20, 2, "PRO-B", 1, ""),
            ],
            vec![DiagnosticAid::new(20, 1, "AYD-1", 1)],
        );
        let errors = ProceduresLinkedRule.evaluate(&ctx);
        let messages = errors.messages("procedimientos").unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("tienen el ítem 2 repetido"));
        assert!(messages[0].contains("con catálogo 'PRO-A', con catálogo 'PRO-B'"));
    }

    #[test]
    fn numbering_checked_only_when_alone() {
        // Gap in the medication numbers, but procedures exist for the
        // order, so the per-kind scan stays off.
        let ctx = context(
            vec![
                Medication::new(20, 1, "MED-1", "", 0),
                Medication::new(20, 3, "MED-3", "", 0),
            ],
            vec![Procedure::new(20, 2, "PRO-1", 1, "")],
            Vec::new(),
        );
        let errors = MedicationsLinkedRule.evaluate(&ctx);
        assert!(errors.is_empty());
    }

    #[test]
    fn single_kind_gap_reports_start_and_first_gap_only() {
        let ctx = context(
            vec![
                Medication::new(20, 2, "MED-2", "", 0),
                Medication::new(20, 3, "MED-3", "", 0),
                Medication::new(20, 4, "MED-4", "", 0),
            ],
            Vec::new(),
            Vec::new(),
        );
        let errors = MedicationsLinkedRule.evaluate(&ctx);
        let messages = errors.messages("medicamentos").unwrap();
        assert!(messages.iter().any(|m| m.contains("deben iniciar en el ítem 1")));
        let gaps: Vec<&String> = messages
            .iter()
            .filter(|m| m.contains("presenta un salto"))
            .collect();
        assert_eq!(gaps.len(), 1);
        assert!(gaps[0].contains("se esperaba el ítem 1 y se encontró el 2"));
    }

    #[test]
    fn diagnostic_aids_use_their_own_field_and_wording() {
        let ctx = context(
            Vec::new(),
            Vec::new(),
            vec![DiagnosticAid::new(77, 1, "AYD-1", 2)],
        );
        let errors = DiagnosticAidsLinkedRule.evaluate(&ctx);
        let messages = errors.messages("ayudasDiagnosticas").unwrap();
        assert!(messages[0].starts_with("La ayuda diagnóstica"));
        assert!(messages[0].contains("pero la orden actual es 20"));
    }
}
