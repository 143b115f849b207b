use std::fmt;

use serde::{Deserialize, Serialize};
use swiftbc_state::{LedgerState, ReadWriteSet, StateError};
use tracing::debug;
use uuid::Uuid;

use crate::error::ContractResult;

/// Whether a transaction may change ledger state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Intent {
    /// Reads and writes; the write set is committed on success.
    Submit,
    /// Reads only; any write fails with [`StateError::ReadOnly`].
    Evaluate,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submit => write!(f, "SUBMIT"),
            Self::Evaluate => write!(f, "EVALUATE"),
        }
    }
}

/// Per-invocation handle to the ledger.
///
/// Writes are buffered and reach the ledger only on [`Self::commit`]. Reads
/// see this transaction's own pending writes first, then committed state;
/// committed reads are recorded in the read set.
pub struct TransactionContext<'a> {
    tx_id: Uuid,
    intent: Intent,
    state: &'a dyn LedgerState,
    rw_set: ReadWriteSet,
}

impl<'a> TransactionContext<'a> {
    pub fn new(state: &'a dyn LedgerState, intent: Intent) -> Self {
        Self {
            tx_id: Uuid::now_v7(),
            intent,
            state,
            rw_set: ReadWriteSet::new(),
        }
    }

    /// A context that may write.
    pub fn submit(state: &'a dyn LedgerState) -> Self {
        Self::new(state, Intent::Submit)
    }

    /// A read-only context.
    pub fn evaluate(state: &'a dyn LedgerState) -> Self {
        Self::new(state, Intent::Evaluate)
    }

    pub fn tx_id(&self) -> Uuid {
        self.tx_id
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    /// The reads and writes recorded so far.
    pub fn rw_set(&self) -> &ReadWriteSet {
        &self.rw_set
    }

    /// Read the value under `key`.
    ///
    /// A pending write from this transaction wins. Otherwise the committed
    /// value is read and recorded in the read set.
    pub fn get_state(&mut self, key: &str) -> ContractResult<Option<Vec<u8>>> {
        if let Some(pending) = self.rw_set.pending_write(key) {
            return Ok(Some(pending.to_vec()));
        }
        let value = self.state.get_state(key)?;
        self.rw_set.record_read(key, value.as_deref());
        Ok(value)
    }

    /// Buffer a write of `value` under `key`.
    pub fn put_state(&mut self, key: &str, value: impl Into<Vec<u8>>) -> ContractResult<()> {
        if self.intent == Intent::Evaluate {
            return Err(StateError::ReadOnly.into());
        }
        if key.is_empty() {
            return Err(StateError::EmptyKey.into());
        }
        self.rw_set.record_write(key, value);
        debug!(tx_id = %self.tx_id, key, "write buffered");
        Ok(())
    }

    /// Read committed entries with `start <= key < end`; empty bounds are open.
    pub fn state_by_range(&self, start: &str, end: &str) -> ContractResult<Vec<(String, Vec<u8>)>> {
        Ok(self.state.state_by_range(start, end)?)
    }

    /// Hand the read/write set to the ledger.
    ///
    /// Evaluate transactions commit nothing.
    pub fn commit(self) -> ContractResult<()> {
        if self.intent == Intent::Evaluate {
            return Ok(());
        }
        self.state.commit(&self.rw_set)?;
        debug!(
            tx_id = %self.tx_id,
            writes = self.rw_set.writes().len(),
            "transaction committed"
        );
        Ok(())
    }
}

impl fmt::Debug for TransactionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionContext")
            .field("tx_id", &self.tx_id)
            .field("intent", &self.intent)
            .field("rw_set", &self.rw_set)
            .finish()
    }
}
