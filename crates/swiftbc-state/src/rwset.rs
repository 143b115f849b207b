use std::collections::BTreeMap;

/// A single buffered write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyWrite {
    pub key: String,
    pub value: Vec<u8>,
}

/// Keys a transaction observed and the writes it wants to apply.
///
/// Reads record the committed value seen the first time a key is read
/// (`None` for absent). Writes keep their submission order so the backend
/// applies them exactly as the contract issued them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadWriteSet {
    reads: BTreeMap<String, Option<Vec<u8>>>,
    writes: Vec<KeyWrite>,
}

impl ReadWriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the value observed for `key`. Later reads of the same key do
    /// not overwrite the first observation.
    pub fn record_read(&mut self, key: &str, observed: Option<&[u8]>) {
        self.reads
            .entry(key.to_string())
            .or_insert_with(|| observed.map(<[u8]>::to_vec));
    }

    /// Buffer a write of `value` under `key`.
    pub fn record_write(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.writes.push(KeyWrite {
            key: key.into(),
            value: value.into(),
        });
    }

    /// The most recent buffered value for `key`, if this set writes it.
    pub fn pending_write(&self, key: &str) -> Option<&[u8]> {
        self.writes
            .iter()
            .rev()
            .find(|w| w.key == key)
            .map(|w| w.value.as_slice())
    }

    /// Observed reads, keyed by ledger key.
    pub fn reads(&self) -> &BTreeMap<String, Option<Vec<u8>>> {
        &self.reads
    }

    /// Buffered writes in submission order.
    pub fn writes(&self) -> &[KeyWrite] {
        &self.writes
    }

    /// Returns `true` if no writes are buffered.
    pub fn is_read_only(&self) -> bool {
        self.writes.is_empty()
    }

    /// Returns `true` if nothing was read or written.
    pub fn is_empty(&self) -> bool {
        self.reads.is_empty() && self.writes.is_empty()
    }
}
