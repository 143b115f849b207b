use std::fmt;

use swiftbc_state::StateError;
use swiftbc_types::Field;

/// Stable, machine-readable codes for the caller-facing error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NotEnoughParameter,
    PaymentOrderNotFound,
    PaymentOrderAlreadyExists,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotEnoughParameter => "NOT_ENOUGH_PARAMETER",
            Self::PaymentOrderNotFound => "PAYMENTORDER_NOT_FOUND",
            Self::PaymentOrderAlreadyExists => "PAYMENTORDER_ALREADY_EXISTS",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by contract operations.
///
/// The first three variants are domain errors: caused by caller input or by
/// the state of a key, and carrying an [`ErrorCode`]. Everything else is an
/// infrastructure fault and has no code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// A required argument was absent, empty, or (for `amount`) `"0"`.
    #[error("{field} is empty")]
    MissingParameter { field: Field },

    #[error("The Payment Order ({swift_code}) already exists")]
    AlreadyExists { swift_code: String },

    #[error("The Payment Order ({swift_code}) does not exist")]
    NotFound { swift_code: String },

    /// The stored value under a key could not be decoded.
    #[error("corrupt payment order {swift_code}: {reason}")]
    Corrupt { swift_code: String, reason: String },

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("Undefined contract method called: {0}")]
    UndefinedFunction(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("state error: {0}")]
    State(#[from] StateError),
}

impl ContractError {
    /// The stable code for domain errors, `None` for infrastructure faults.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::MissingParameter { .. } => Some(ErrorCode::NotEnoughParameter),
            Self::AlreadyExists { .. } => Some(ErrorCode::PaymentOrderAlreadyExists),
            Self::NotFound { .. } => Some(ErrorCode::PaymentOrderNotFound),
            _ => None,
        }
    }

    /// Returns `true` for caller-facing domain errors.
    pub fn is_domain(&self) -> bool {
        self.code().is_some()
    }
}

/// Result alias for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;
