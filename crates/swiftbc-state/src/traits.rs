use crate::error::{StateError, StateResult};
use crate::rwset::ReadWriteSet;

/// Ordered key-value world state of the ledger.
///
/// All implementations must satisfy these invariants:
/// - `get_state` distinguishes an absent key (`None`) from an empty value.
/// - `state_by_range` returns entries in ascending key order.
/// - `commit` is atomic: either every read in the set still matches the
///   committed state and every write is applied in order, or nothing is.
/// - Empty keys are rejected on write.
pub trait LedgerState: Send + Sync {
    /// Read the committed value under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get_state(&self, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Read all committed entries with `start <= key < end`.
    ///
    /// An empty `start` or `end` leaves that side of the range unbounded, so
    /// `state_by_range("", "")` iterates the whole key space.
    fn state_by_range(&self, start: &str, end: &str) -> StateResult<Vec<(String, Vec<u8>)>>;

    /// Validate the read set and apply the write set.
    ///
    /// Returns [`StateError::Conflict`] naming the first key whose committed
    /// value no longer matches what the transaction observed.
    fn commit(&self, rw_set: &ReadWriteSet) -> StateResult<()>;

    /// Write a single value without read validation.
    fn put_state(&self, key: &str, value: &[u8]) -> StateResult<()> {
        let mut rw_set = ReadWriteSet::new();
        rw_set.record_write(key, value);
        self.commit(&rw_set)
    }

    /// Read the committed value under `key` as UTF-8 text.
    fn get_string_state(&self, key: &str) -> StateResult<Option<String>> {
        self.get_state(key)?
            .map(|bytes| {
                String::from_utf8(bytes).map_err(|_| StateError::InvalidUtf8 {
                    key: key.to_string(),
                })
            })
            .transpose()
    }
}
