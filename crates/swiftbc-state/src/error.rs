/// Errors from ledger state operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Keys must be non-empty.
    #[error("key must not be empty")]
    EmptyKey,

    /// A key in the read set changed before the transaction committed.
    #[error("read conflict on key {key}")]
    Conflict { key: String },

    /// A write was attempted in a read-only transaction.
    #[error("state is read-only")]
    ReadOnly,

    /// The stored value is not valid UTF-8.
    #[error("value under key {key} is not valid UTF-8")]
    InvalidUtf8 { key: String },

    /// The backend is unavailable or failed (including lock poisoning).
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result alias for state operations.
pub type StateResult<T> = Result<T, StateError>;
