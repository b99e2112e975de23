// Ordenes - Medical Orders Service
// Copyright (c) 2025 Ordenes Contributors
// Licensed under the MIT License

//! # Ordenes - Medical Orders Service
//!
//! Ordenes manages medical orders (prescriptions) composed of three kinds
//! of line items: medications, procedures and diagnostic aids. Each kind
//! lives in its own collection keyed by order number and item number.
//!
//! The heart of the crate is the order-creation pipeline:
//!
//! - a pluggable **business-rule engine** ([`rules`]) checking structural
//!   and domain invariants across an order and its heterogeneous items;
//! - a **multi-collection write orchestration** ([`service`]) that
//!   behaves transactionally over a store without multi-document
//!   transactions, using compensating deletes on partial failure.
//!
//! ## Architecture
//!
//! - [`api`] - axum handlers and status-code mapping
//! - [`service`] - order workflow and thin item reads
//! - [`rules`] - validation context, rule contract, concrete rules,
//!   aggregating validator
//! - [`storage`] - store traits and the in-memory implementation
//! - [`domain`] - entities, wire shapes, errors, the error map
//! - [`config`] - configuration management
//! - [`logging`] - structured logging setup
//!
//! ## Validating an order
//!
//! ```
//! use chrono::Utc;
//! use ordenes::domain::{Medication, Order, OrderStatus, Procedure};
//! use ordenes::rules::{OrderValidator, ValidationContext};
//!
//! let order = Order::new(1001, "1032456789", "52987654", Utc::now(), OrderStatus::Pendiente);
//! let context = ValidationContext::new(
//!     order,
//!     vec![Medication::new(1001, 1, "MED-ACETAMINOFEN", "500mg", 5)],
//!     vec![Procedure::new(1001, 2, "PRO-CURACION", 1, "diaria")],
//!     Vec::new(),
//! );
//!
//! let errors = OrderValidator::with_default_rules().evaluate_all(&context);
//! assert!(errors.is_empty());
//! ```
//!
//! ## Error handling
//!
//! Expected validation rejections are data, not faults: `create` returns
//! [`domain::CreateOrderError::Rejected`] carrying the aggregated
//! field → messages map. Storage faults propagate as
//! [`domain::StorageError`] after compensation has run.

pub mod api;
pub mod config;
pub mod domain;
pub mod logging;
pub mod rules;
pub mod service;
pub mod storage;
