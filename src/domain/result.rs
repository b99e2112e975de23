//! Result type aliases.

use super::errors::{OrdenesError, StorageError};

/// Result alias used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, OrdenesError>;

/// Result alias for operations at the persistence boundary.
pub type StorageResult<T> = std::result::Result<T, StorageError>;
