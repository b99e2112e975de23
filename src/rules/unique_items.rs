//! Cross-kind item uniqueness and numbering.

use crate::domain::ErrorMap;
use crate::rules::report::catalog_label;
use crate::rules::{ValidationContext, ValidationRule};
use indexmap::IndexMap;

/// Checks that item numbers are valid, unique across the union of the
/// three line-item kinds, and form a contiguous run starting at 1.
///
/// Violations are reported under the `numeroItem` field:
/// - every item number ≤ 0, individually;
/// - every positive item number shared by two or more items, as one
///   message per number listing the offending items;
/// - a numbering that does not start at 1, and the first gap in the
///   distinct positive numbers (later gaps are not reported).
pub struct UniqueItemsRule;

const FIELD: &str = "numeroItem";

/// One line item reduced to what this rule needs.
struct ItemSummary<'a> {
    kind: &'static str,
    item_number: i32,
    catalog_id: &'a str,
}

impl ItemSummary<'_> {
    fn label(&self) -> String {
        format!("{} {}", self.kind, catalog_label(self.catalog_id))
    }
}

impl ValidationRule for UniqueItemsRule {
    fn name(&self) -> &str {
        "Ítems únicos por orden"
    }

    fn evaluate(&self, context: &ValidationContext) -> ErrorMap {
        let mut errors = ErrorMap::new();

        let items: Vec<ItemSummary<'_>> = context
            .medications()
            .iter()
            .map(|m| ItemSummary {
                kind: "medicamento",
                item_number: m.item_number,
                catalog_id: &m.catalog_id,
            })
            .chain(context.procedures().iter().map(|p| ItemSummary {
                kind: "procedimiento",
                item_number: p.item_number,
                catalog_id: &p.catalog_id,
            }))
            .chain(context.diagnostic_aids().iter().map(|a| ItemSummary {
                kind: "ayuda diagnóstica",
                item_number: a.item_number,
                catalog_id: &a.catalog_id,
            }))
            .collect();

        if items.is_empty() {
            return errors;
        }

        let order_number = context.order().order_number;

        for item in items.iter().filter(|i| i.item_number <= 0) {
            errors.push(
                FIELD,
                format!(
                    "El {} de la orden {} tiene número de ítem {}, el valor debe ser mayor o igual a 1.",
                    item.label(),
                    order_number,
                    item.item_number
                ),
            );
        }

        // Group by item number, keeping first-occurrence order for both the
        // groups and their members.
        let mut groups: IndexMap<i32, Vec<&ItemSummary<'_>>> = IndexMap::new();
        for item in &items {
            groups.entry(item.item_number).or_default().push(item);
        }

        for (item_number, group) in groups.iter().filter(|(n, g)| **n > 0 && g.len() > 1) {
            let detail = group
                .iter()
                .map(|i| i.label())
                .collect::<Vec<_>>()
                .join(", ");
            errors.push(
                FIELD,
                format!(
                    "La orden {order_number} tiene el número de ítem {item_number} repetido en: {detail}."
                ),
            );
        }

        let mut numbers: Vec<i32> = items
            .iter()
            .map(|i| i.item_number)
            .filter(|n| *n > 0)
            .collect();
        numbers.sort_unstable();
        numbers.dedup();

        if numbers.first().is_some_and(|first| *first != 1) {
            errors.push(
                FIELD,
                format!("La numeración de ítems de la orden {order_number} debe iniciar en 1."),
            );
        }

        for (index, actual) in numbers.iter().enumerate() {
            let expected = index as i32 + 1;
            if *actual != expected {
                errors.push(
                    FIELD,
                    format!(
                        "La numeración de ítems de la orden {order_number} presenta un salto: se esperaba el ítem {expected} pero se encontró {actual}."
                    ),
                );
                break;
            }
        }

        errors
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
        let order = Order::new(10, "123", "456", Utc::now(), OrderStatus::Pendiente);
        ValidationContext::new(order, medications, procedures, diagnostic_aids)
    }

    #[test]
    fn empty_order_passes() {
        let errors = UniqueItemsRule.evaluate(&context(Vec::new(), Vec::new(), Vec::new()));
        assert!(errors.is_empty());
    }

    #[test]
    fn contiguous_numbering_across_kinds_passes() {
        let ctx = context(
            vec![Medication::new(10, 1, "MED-1", "5mg", 3)],
            vec![Procedure::new(10, 2, "PRO-1", 1, "diaria")],
            vec![DiagnosticAid::new(10, 3, "AYD-1", 1)],
        );
        assert!(UniqueItemsRule.evaluate(&ctx).is_empty());
    }

    #[test]
    fn non_positive_numbers_reported_individually() {
        let ctx = context(
            vec![
                Medication::new(10, 0, "MED-1", "", 0),
                Medication::new(10, -3, "MED-2", "", 0),
                Medication::new(10, 1, "MED-3", "", 0),
            ],
            Vec::new(),
            Vec::new(),
        );
        let errors = UniqueItemsRule.evaluate(&ctx);
        let messages = errors.messages("numeroItem").unwrap();
        let invalid: Vec<&String> = messages
            .iter()
            .filter(|m| m.contains("mayor o igual a 1"))
            .collect();
        assert_eq!(invalid.len(), 2);
        assert!(invalid[0].contains("número de ítem 0"));
        assert!(invalid[1].contains("número de ítem -3"));
    }

    #[test]
    fn duplicate_across_kinds_reported_once_with_both_members() {
        let ctx = context(
            vec![
                Medication::new(10, 1, "MED-1", "", 0),
                Medication::new(10, 3, "MED-3", "", 0),
            ],
            vec![
                Procedure::new(10, 2, "PRO-2", 1, ""),
                Procedure::new(10, 3, "PRO-3", 1, ""),
            ],
            Vec::new(),
        );
        let errors = UniqueItemsRule.evaluate(&ctx);
        let messages = errors.messages("numeroItem").unwrap();
        let duplicates: Vec<&String> = messages.iter().filter(|m| m.contains("repetido")).collect();
        assert_eq!(duplicates.len(), 1);
        assert!(duplicates[0].contains("medicamento con catálogo 'MED-3'"));
        assert!(duplicates[0].contains("procedimiento con catálogo 'PRO-3'"));
    }

    #[test]
    fn only_first_gap_is_reported() {
        let ctx = context(
            vec![
                Medication::new(10, 1, "MED-1", "", 0),
                Medication::new(10, 3, "MED-3", "", 0),
                Medication::new(10, 6, "MED-6", "", 0),
            ],
            Vec::new(),
            Vec::new(),
        );
        let errors = UniqueItemsRule.evaluate(&ctx);
        let messages = errors.messages("numeroItem").unwrap();
        let gaps: Vec<&String> = messages
            .iter()
            .filter(|m| m.contains("presenta un salto"))
            .collect();
        assert_eq!(gaps.len(), 1);
        assert!(gaps[0].contains("se esperaba el ítem 2 pero se encontró 3"));
    }

    #[test]
    fn numbering_must_start_at_one() {
        let ctx = context(
            vec![Medication::new(10, 2, "MED-1", "", 0)],
            Vec::new(),
            Vec::new(),
        );
        let errors = UniqueItemsRule.evaluate(&ctx);
        let messages = errors.messages("numeroItem").unwrap();
        assert!(messages.iter().any(|m| m.contains("debe iniciar en 1")));
    }

    #[test]
    fn missing_catalog_uses_fallback_label() {
        let ctx = context(
            vec![
                Medication::new(10, 1, "", "", 0),
                Medication::new(10, 1, "MED-1", "", 0),
            ],
            Vec::new(),
            Vec::new(),
        );
        let errors = UniqueItemsRule.evaluate(&ctx);
        let messages = errors.messages("numeroItem").unwrap();
        assert!(messages
            .iter()
            .any(|m| m.contains("medicamento sin catálogo asignado")));
    }
}
