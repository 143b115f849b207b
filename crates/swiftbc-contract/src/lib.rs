//! Payment order contract for SwiftBC.
//!
//! This crate is the heart of SwiftBC. It provides:
//! - `SwiftBc`: validated creation, existence checks, and read-back of
//!   payment orders, plus the `InitLedger` seeding operation
//! - `TransactionContext`: the per-invocation ledger handle with buffered
//!   writes and a recorded read set
//! - The wire codec mapping records to and from their flat JSON form
//! - `ContractRegistry`: the name-to-handler dispatch table
//! - `ContractConfig`: contract name and published metadata, loadable from TOML
//!
//! Domain failures (`MissingParameter`, `AlreadyExists`, `NotFound`) carry a
//! stable [`ErrorCode`]; ledger faults and corrupt records do not.

pub mod args;
pub mod codec;
pub mod config;
pub mod context;
pub mod contract;
pub mod error;
pub mod registry;
pub mod seed;

pub use args::PaymentOrderArgs;
pub use config::{ContactInfo, ContractConfig, ContractInfo, LicenseInfo};
pub use context::{Intent, TransactionContext};
pub use contract::SwiftBc;
pub use error::{ContractError, ContractResult, ErrorCode};
pub use registry::{ContractRegistry, Handler, Response, TransactionDef};
pub use seed::sample_orders;

// Re-export key types
pub use swiftbc_state::{InMemoryLedgerState, LedgerState};
pub use swiftbc_types::{Field, PaymentOrder};
