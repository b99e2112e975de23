//! Domain error types.
//!
//! All errors are domain-specific and do not expose third-party types.
//! Expected validation rejections travel as data ([`ErrorMap`]) inside
//! [`CreateOrderError::Rejected`]; genuinely unexpected storage faults use
//! the [`StorageError`] variants.

use crate::domain::error_map::ErrorMap;
use thiserror::Error;

/// Main service error type.
#[derive(Debug, Error)]
pub enum OrdenesError {
    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Storage-related errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Serialization/deserialization errors
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors raised at the persistence boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A uniqueness constraint rejected the write.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// The backing store could not serve the request.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A compensating delete failed after a write had already failed.
    ///
    /// Both causes are kept: `original` is the write error that triggered
    /// the rollback, `compensation` is the delete that then failed. The
    /// affected order may be partially persisted until cleaned up manually.
    #[error("rollback after failed write also failed: {compensation} (original write error: {original})")]
    RollbackFailed {
        original: Box<StorageError>,
        compensation: Box<StorageError>,
    },
}

/// Outcome of the order-creation workflow when it does not succeed.
///
/// A rejected order is an expected, frequent outcome and carries the full
/// field → messages map for the conflict response. Storage faults are the
/// unexpected path and propagate the underlying error unchanged.
#[derive(Debug, Error)]
pub enum CreateOrderError {
    /// Structural checks or business rules found violations; nothing was
    /// persisted.
    #[error("la orden no cumple las reglas de negocio")]
    Rejected(ErrorMap),

    /// A write failed during commit (compensation already ran).
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<std::io::Error> for OrdenesError {
    fn from(err: std::io::Error) -> Self {
        OrdenesError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OrdenesError {
    fn from(err: serde_json::Error) -> Self {
        OrdenesError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for OrdenesError {
    fn from(err: toml::de::Error) -> Self {
        OrdenesError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_converts_into_service_error() {
        let err: OrdenesError = StorageError::Unavailable("sin conexión".to_string()).into();
        assert!(matches!(err, OrdenesError::Storage(_)));
    }

    #[test]
    fn rollback_failure_keeps_both_causes() {
        let err = StorageError::RollbackFailed {
            original: Box::new(StorageError::Unavailable("write timeout".to_string())),
            compensation: Box::new(StorageError::Unavailable("delete timeout".to_string())),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("write timeout"));
        assert!(rendered.contains("delete timeout"));
    }

    #[test]
    fn rejected_create_carries_the_error_map() {
        let mut errors = ErrorMap::new();
        errors.push("numeroOrden", "La orden con número 9 ya existe.");
        let err = CreateOrderError::Rejected(errors);
        match err {
            CreateOrderError::Rejected(map) => {
                assert_eq!(map.messages("numeroOrden").unwrap().len(), 1);
            }
            CreateOrderError::Storage(_) => panic!("expected Rejected"),
        }
    }

    #[test]
    fn errors_implement_std_error() {
        let err = OrdenesError::Configuration("bad".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
