//! Configuration management.
//!
//! TOML-based configuration with `${VAR}` environment substitution,
//! `ORDENES_*` overrides and validation on load.
//!
//! # Example configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{ApplicationConfig, LoggingConfig, OrdenesConfig, ServerConfig};
