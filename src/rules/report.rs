//! Shared message-formatting helpers for the rules.

/// Renders the catalog part of a violation message.
///
/// Quotes the catalog id, or reports that none was assigned when the id is
/// empty or blank.
pub(crate) fn catalog_label(catalog_id: &str) -> String {
    if catalog_id.trim().is_empty() {
        "sin catálogo asignado".to_string()
    } else {
        format!("con catálogo '{catalog_id}'")
    }
}
