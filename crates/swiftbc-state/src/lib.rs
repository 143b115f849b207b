//! Ledger world-state access for SwiftBC.
//!
//! The ledger is an ordered key-value store. Contract code never mutates it
//! directly: reads go to committed state, writes are buffered in a
//! [`ReadWriteSet`] and applied by [`LedgerState::commit`] once the
//! transaction succeeds.
//!
//! # Storage Backends
//!
//! All backends implement the [`LedgerState`] trait:
//!
//! - [`InMemoryLedgerState`] -- `BTreeMap`-based state for tests and embedding
//!
//! # Design Rules
//!
//! 1. An absent key (`None`) is distinct from a key holding an empty value.
//! 2. Range reads return entries in ascending key order.
//! 3. Commit validates the read set and applies the writes atomically.
//! 4. A key whose committed value changed since it was read is a conflict.
//! 5. Writes to the same key within one set are last-writer-wins.
//! 6. Backend faults are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod rwset;
pub mod traits;

pub use error::{StateError, StateResult};
pub use memory::InMemoryLedgerState;
pub use rwset::{KeyWrite, ReadWriteSet};
pub use traits::LedgerState;
