//! Rule-engine behavior over realistic orders.

use chrono::Utc;
use ordenes::domain::{DiagnosticAid, Medication, Order, OrderStatus, Procedure};
use ordenes::rules::{
    HospitalizationRule, MedicationsLinkedRule, OrderValidator, UniqueItemsRule,
    ValidationContext, ValidationRule,
};

fn order(order_number: i32) -> Order {
    Order::new(
        order_number,
        "1032456789",
        "52987654",
        Utc::now(),
        OrderStatus::Pendiente,
    )
}

#[test]
fn contiguous_numbering_across_two_kinds_passes_every_rule() {
    let context = ValidationContext::new(
        order(100),
        vec![
            Medication::new(100, 1, "MED-ACETAMINOFEN", "500mg", 5),
            Medication::new(100, 2, "MED-IBUPROFENO", "400mg", 3),
        ],
        vec![Procedure::new(100, 3, "PRO-CURACION", 2, "diaria")],
        vec![DiagnosticAid::new(100, 4, "AYD-RAYOS-X", 1)],
    );

    assert!(UniqueItemsRule.evaluate(&context).is_empty());
    assert!(OrderValidator::with_default_rules()
        .evaluate_all(&context)
        .is_empty());
}

#[test]
fn single_kind_starting_at_two_reports_exactly_one_gap() {
    let context = ValidationContext::new(
        order(101),
        vec![
            Medication::new(101, 2, "MED-A", "", 0),
            Medication::new(101, 3, "MED-B", "", 0),
            Medication::new(101, 4, "MED-C", "", 0),
        ],
        Vec::new(),
        Vec::new(),
    );

    let errors = MedicationsLinkedRule.evaluate(&context);
    let messages = errors.messages("medicamentos").unwrap();
    let gaps: Vec<&String> = messages
        .iter()
        .filter(|m| m.contains("presenta un salto"))
        .collect();
    assert_eq!(gaps.len(), 1);
    assert!(gaps[0].contains("se esperaba el ítem 1 y se encontró el 2"));
}

#[test]
fn later_gaps_are_not_reported_after_the_first() {
    let context = ValidationContext::new(
        order(102),
        vec![
            Medication::new(102, 1, "MED-A", "", 0),
            Medication::new(102, 3, "MED-B", "", 0),
            Medication::new(102, 7, "MED-C", "", 0),
        ],
        Vec::new(),
        Vec::new(),
    );

    let errors = UniqueItemsRule.evaluate(&context);
    let messages = errors.messages("numeroItem").unwrap();
    let gaps: Vec<&String> = messages
        .iter()
        .filter(|m| m.contains("presenta un salto"))
        .collect();
    assert_eq!(gaps.len(), 1);
    assert!(gaps[0].contains("se esperaba el ítem 2 pero se encontró 3"));
}

#[test]
fn cross_kind_duplicate_is_reported_once_and_only_by_the_union_rule() {
    let context = ValidationContext::new(
        order(103),
        vec![
            Medication::new(103, 1, "MED-A", "", 0),
            Medication::new(103, 3, "MED-B", "", 0),
        ],
        vec![
            Procedure::new(103, 2, "PRO-A", 1, ""),
            Procedure::new(103, 3, "PRO-B", 1, ""),
        ],
        Vec::new(),
    );

    let errors = OrderValidator::with_default_rules().evaluate_all(&context);

    let union_messages = errors.messages("numeroItem").unwrap();
    let duplicates: Vec<&String> = union_messages
        .iter()
        .filter(|m| m.contains("repetido"))
        .collect();
    assert_eq!(duplicates.len(), 1);
    assert!(duplicates[0].contains("con catálogo 'MED-B'"));
    assert!(duplicates[0].contains("con catálogo 'PRO-B'"));

    // The per-kind rules stay silent: no same-kind duplicate exists and
    // the per-kind numbering scan is off while other kinds are present.
    assert!(errors.messages("medicamentos").is_none());
    assert!(errors.messages("procedimientos").is_none());
}

#[test]
fn hospitalization_match_is_diacritic_and_case_insensitive() {
    let with_accent = ValidationContext::new(
        order(104),
        Vec::new(),
        vec![Procedure::new(104, 1, "HOSPITALIZACIÓN", 1, "")],
        Vec::new(),
    );
    let without_accent = ValidationContext::new(
        order(104),
        Vec::new(),
        vec![Procedure::new(104, 1, "hospitalizacion", 1, "")],
        Vec::new(),
    );

    let first = HospitalizationRule.evaluate(&with_accent);
    let second = HospitalizationRule.evaluate(&without_accent);

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(first.messages("procedimientos").unwrap().len(), 1);
}

#[test]
fn lone_hospitalization_without_medications_yields_two_messages() {
    let context = ValidationContext::new(
        order(105),
        Vec::new(),
        vec![Procedure::new(105, 1, "PRO-HOSPITALIZACION", 1, "")],
        Vec::new(),
    );

    let errors = HospitalizationRule.evaluate(&context);
    assert_eq!(errors.messages("procedimientos").unwrap().len(), 1);
    assert_eq!(errors.messages("medicamentos").unwrap().len(), 1);
    assert!(errors.messages("procedimientos").unwrap()[0].contains("visitas de enfermería"));
    assert!(errors.messages("medicamentos").unwrap()[0].contains("para la estancia"));
}

#[test]
fn evaluate_all_twice_produces_identical_maps() {
    let context = ValidationContext::new(
        order(106),
        vec![
            Medication::new(106, 0, "MED-A", "", 0),
            Medication::new(106, 2, "MED-B", "", 0),
        ],
        vec![Procedure::new(106, 2, "HOSPITALIZACIÓN", 1, "")],
        Vec::new(),
    );
    let validator = OrderValidator::with_default_rules();

    let first = serde_json::to_string(&validator.evaluate_all(&context)).unwrap();
    let second = serde_json::to_string(&validator.evaluate_all(&context)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn merged_keys_appear_in_rule_registration_order() {
    // Violates the union rule (duplicate 1), the medication rule is
    // silent, and the hospitalization rule fires afterwards.
    let context = ValidationContext::new(
        order(107),
        Vec::new(),
        vec![
            Procedure::new(107, 1, "HOSPITALIZACIÓN", 1, ""),
            Procedure::new(107, 1, "PRO-ENFERMERIA", 1, ""),
        ],
        Vec::new(),
    );

    let errors = OrderValidator::with_default_rules().evaluate_all(&context);
    let fields: Vec<&str> = errors.fields().collect();
    assert_eq!(fields, vec!["numeroItem", "procedimientos", "medicamentos"]);
}

#[test]
fn selective_rule_run_matches_name_case_insensitively() {
    let context = ValidationContext::new(
        order(108),
        Vec::new(),
        vec![Procedure::new(108, 1, "HOSPITALIZACIÓN", 1, "")],
        Vec::new(),
    );
    let validator = OrderValidator::with_default_rules();

    let errors = validator.evaluate_rule(&context, "hospitalización como procedimiento");
    assert_eq!(errors.messages("medicamentos").unwrap().len(), 1);

    // Only the named rule runs: the duplicate-free numbering issues the
    // union rule would flag are absent.
    assert!(errors.messages("numeroItem").is_none());
}
