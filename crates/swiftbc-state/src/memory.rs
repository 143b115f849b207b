use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{StateError, StateResult};
use crate::rwset::{KeyWrite, ReadWriteSet};
use crate::traits::LedgerState;

/// In-memory, `BTreeMap`-based ledger state.
///
/// Intended for tests and embedding. Entries live behind a single `RwLock`,
/// so a commit validates and applies its read/write set without any other
/// commit interleaving. Every applied write is also appended to a history
/// log, in commit order.
pub struct InMemoryLedgerState {
    inner: RwLock<StateInner>,
}

#[derive(Default)]
struct StateInner {
    entries: BTreeMap<String, Vec<u8>>,
    history: Vec<KeyWrite>,
}

impl InMemoryLedgerState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StateInner::default()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> StateResult<usize> {
        Ok(self.read_inner()?.entries.len())
    }

    /// Returns `true` if no keys are stored.
    pub fn is_empty(&self) -> StateResult<bool> {
        Ok(self.len()? == 0)
    }

    /// All stored keys in ascending order.
    pub fn keys(&self) -> StateResult<Vec<String>> {
        Ok(self.read_inner()?.entries.keys().cloned().collect())
    }

    /// Every write applied so far, in the order it was committed.
    pub fn history(&self) -> StateResult<Vec<KeyWrite>> {
        Ok(self.read_inner()?.history.clone())
    }

    fn read_inner(&self) -> StateResult<RwLockReadGuard<'_, StateInner>> {
        self.inner
            .read()
            .map_err(|e| StateError::Backend(format!("lock poisoned: {e}")))
    }

    fn write_inner(&self) -> StateResult<RwLockWriteGuard<'_, StateInner>> {
        self.inner
            .write()
            .map_err(|e| StateError::Backend(format!("lock poisoned: {e}")))
    }
}

impl Default for InMemoryLedgerState {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerState for InMemoryLedgerState {
    fn get_state(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        Ok(self.read_inner()?.entries.get(key).cloned())
    }

    fn state_by_range(&self, start: &str, end: &str) -> StateResult<Vec<(String, Vec<u8>)>> {
        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start)
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end)
        };
        if let (Bound::Included(s), Bound::Excluded(e)) = (lower, upper) {
            // BTreeMap::range panics on an inverted range.
            if s >= e {
                return Ok(Vec::new());
            }
        }

        let inner = self.read_inner()?;
        Ok(inner
            .entries
            .range::<str, _>((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    fn commit(&self, rw_set: &ReadWriteSet) -> StateResult<()> {
        if rw_set.writes().iter().any(|w| w.key.is_empty()) {
            return Err(StateError::EmptyKey);
        }

        let mut inner = self.write_inner()?;

        for (key, observed) in rw_set.reads() {
            if inner.entries.get(key) != observed.as_ref() {
                debug!(key = %key, "read set no longer matches committed state");
                return Err(StateError::Conflict { key: key.clone() });
            }
        }

        for write in rw_set.writes() {
            inner.entries.insert(write.key.clone(), write.value.clone());
            inner.history.push(write.clone());
        }
        debug!(
            reads = rw_set.reads().len(),
            writes = rw_set.writes().len(),
            "read/write set committed"
        );
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryLedgerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryLedgerState")
            .field("key_count", &self.len().ok())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> InMemoryLedgerState {
        let state = InMemoryLedgerState::new();
        for key in ["b", "a", "d", "c"] {
            state.put_state(key, key.as_bytes()).unwrap();
        }
        state
    }

    // -----------------------------------------------------------------------
    // Point reads and writes
    // -----------------------------------------------------------------------

    #[test]
    fn put_and_get() {
        let state = InMemoryLedgerState::new();
        state.put_state("key", b"value").unwrap();
        assert_eq!(state.get_state("key").unwrap(), Some(b"value".to_vec()));
    }

    #[test]
    fn missing_key_is_none() {
        let state = InMemoryLedgerState::new();
        assert_eq!(state.get_state("missing").unwrap(), None);
    }

    #[test]
    fn empty_value_is_distinct_from_absent() {
        let state = InMemoryLedgerState::new();
        state.put_state("empty", b"").unwrap();
        assert_eq!(state.get_state("empty").unwrap(), Some(Vec::new()));
        assert_eq!(state.get_state("absent").unwrap(), None);
    }

    #[test]
    fn put_is_last_writer_wins() {
        let state = InMemoryLedgerState::new();
        state.put_state("k", b"first").unwrap();
        state.put_state("k", b"second").unwrap();
        assert_eq!(state.get_state("k").unwrap(), Some(b"second".to_vec()));
        assert_eq!(state.len().unwrap(), 1);
    }

    #[test]
    fn empty_key_rejected() {
        let state = InMemoryLedgerState::new();
        assert_eq!(state.put_state("", b"v"), Err(StateError::EmptyKey));
        assert!(state.is_empty().unwrap());
    }

    #[test]
    fn string_state_decodes_utf8() {
        let state = InMemoryLedgerState::new();
        state.put_state("k", "원화".as_bytes()).unwrap();
        assert_eq!(state.get_string_state("k").unwrap(), Some("원화".to_string()));
        assert_eq!(state.get_string_state("none").unwrap(), None);
    }

    #[test]
    fn string_state_rejects_invalid_utf8() {
        let state = InMemoryLedgerState::new();
        state.put_state("bad", &[0xff, 0xfe]).unwrap();
        assert_eq!(
            state.get_string_state("bad"),
            Err(StateError::InvalidUtf8 { key: "bad".into() })
        );
    }

    // -----------------------------------------------------------------------
    // Range reads
    // -----------------------------------------------------------------------

    #[test]
    fn full_range_is_ordered() {
        let state = seeded();
        let keys: Vec<String> = state
            .state_by_range("", "")
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn bounded_range_is_half_open() {
        let state = seeded();
        let keys: Vec<String> = state
            .state_by_range("b", "d")
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn open_ended_ranges() {
        let state = seeded();
        assert_eq!(state.state_by_range("c", "").unwrap().len(), 2);
        assert_eq!(state.state_by_range("", "b").unwrap().len(), 1);
    }

    #[test]
    fn inverted_range_is_empty() {
        let state = seeded();
        assert!(state.state_by_range("d", "a").unwrap().is_empty());
        assert!(state.state_by_range("b", "b").unwrap().is_empty());
    }

    // -----------------------------------------------------------------------
    // Commit validation
    // -----------------------------------------------------------------------

    #[test]
    fn commit_applies_writes_in_order() {
        let state = InMemoryLedgerState::new();
        let mut rw = ReadWriteSet::new();
        rw.record_read("x", None);
        rw.record_write("x", b"1".to_vec());
        rw.record_write("y", b"2".to_vec());
        state.commit(&rw).unwrap();

        let history: Vec<String> = state.history().unwrap().into_iter().map(|w| w.key).collect();
        assert_eq!(history, vec!["x", "y"]);
        assert_eq!(state.keys().unwrap(), vec!["x", "y"]);
    }

    #[test]
    fn stale_read_conflicts() {
        let state = InMemoryLedgerState::new();

        let mut first = ReadWriteSet::new();
        first.record_read("k", None);
        first.record_write("k", b"first".to_vec());

        let mut second = ReadWriteSet::new();
        second.record_read("k", None);
        second.record_write("k", b"second".to_vec());

        state.commit(&first).unwrap();
        assert_eq!(
            state.commit(&second),
            Err(StateError::Conflict { key: "k".into() })
        );
        assert_eq!(state.get_state("k").unwrap(), Some(b"first".to_vec()));
        assert_eq!(state.history().unwrap().len(), 1);
    }

    #[test]
    fn conflicting_commit_applies_nothing() {
        let state = InMemoryLedgerState::new();
        state.put_state("guard", b"v1").unwrap();

        let mut rw = ReadWriteSet::new();
        rw.record_read("guard", Some(b"v0".as_slice()));
        rw.record_write("other", b"x".to_vec());
        assert!(state.commit(&rw).is_err());
        assert_eq!(state.get_state("other").unwrap(), None);
    }

    #[test]
    fn empty_key_in_write_set_applies_nothing() {
        let state = InMemoryLedgerState::new();
        let mut rw = ReadWriteSet::new();
        rw.record_write("ok", b"1".to_vec());
        rw.record_write("", b"2".to_vec());
        assert_eq!(state.commit(&rw), Err(StateError::EmptyKey));
        assert!(state.is_empty().unwrap());
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[test]
    fn racing_commits_on_same_key_admit_one() {
        use std::sync::Arc;
        use std::thread;

        let state = Arc::new(InMemoryLedgerState::new());
        let handles: Vec<_> = (0..8u8)
            .map(|i| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    let mut rw = ReadWriteSet::new();
                    rw.record_read("contended", None);
                    rw.record_write("contended", vec![i]);
                    state.commit(&rw).is_ok()
                })
            })
            .collect();

        let committed = handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic"))
            .filter(|ok| *ok)
            .count();
        assert_eq!(committed, 1);
        assert_eq!(state.history().unwrap().len(), 1);
    }

    #[test]
    fn poisoned_lock_is_an_error_not_an_empty_store() {
        use std::sync::Arc;
        use std::thread;

        let state = Arc::new(seeded());
        let poisoner = Arc::clone(&state);
        let joined = thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(joined.is_err());

        assert!(matches!(state.len(), Err(StateError::Backend(_))));
        assert!(matches!(state.is_empty(), Err(StateError::Backend(_))));
        assert!(format!("{state:?}").contains("key_count: None"));
    }

    #[test]
    fn debug_format() {
        let debug = format!("{:?}", seeded());
        assert!(debug.contains("InMemoryLedgerState"));
        assert!(debug.contains("key_count: Some(4)"));
    }
}
