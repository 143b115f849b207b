//! Foundation types for SwiftBC.
//!
//! This crate provides the payment order record stored on the ledger and the
//! enumeration of its wire fields. Every other SwiftBC crate depends on
//! `swiftbc-types`.
//!
//! # Key Types
//!
//! - [`PaymentOrder`] — Immutable remittance record keyed by its SWIFT reference
//! - [`Field`] — The thirteen record fields, in declaration order

pub mod error;
pub mod field;
pub mod payment_order;

pub use error::TypeError;
pub use field::{Field, FIELD_COUNT};
pub use payment_order::PaymentOrder;
