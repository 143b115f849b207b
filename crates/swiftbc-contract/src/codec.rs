//! Wire encoding for payment orders stored on the ledger.
//!
//! A record is stored as a flat JSON object with the thirteen field names as
//! keys, in declaration order. Decoding accepts exactly that shape: a
//! missing key, an extra key, or a non-string value is a corrupt record.

use swiftbc_types::PaymentOrder;

use crate::error::{ContractError, ContractResult};

/// Encode a payment order to its ledger representation.
pub fn encode(order: &PaymentOrder) -> ContractResult<Vec<u8>> {
    serde_json::to_vec(order).map_err(|e| ContractError::Encoding(e.to_string()))
}

/// Decode the value stored under `swift_code`.
///
/// Failures are reported as [`ContractError::Corrupt`], never as a missing
/// record.
pub fn decode(swift_code: &str, bytes: &[u8]) -> ContractResult<PaymentOrder> {
    serde_json::from_slice(bytes).map_err(|e| ContractError::Corrupt {
        swift_code: swift_code.to_string(),
        reason: e.to_string(),
    })
}
