use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TypeError;

/// Number of fields on a [`PaymentOrder`](crate::PaymentOrder).
pub const FIELD_COUNT: usize = 13;

/// A payment order field, named as it appears on the wire.
///
/// Variants are listed in declaration order. That order is used for the
/// encoded JSON object, for positional invocation arguments, and for
/// reporting the first missing parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Reference number; also the ledger key.
    SwiftCode,
    Date,
    Amount,
    Currency,
    OrdererName,
    OrdererAddress,
    /// Orderer customer number.
    OrdererId,
    ReceiverAccount,
    ReceiverName,
    ReceiverAddress,
    /// Purpose of the remittance.
    RemittanceInformation,
    AdditionalInstruction,
    /// Which party bears the charges.
    ChargeDetail,
}

impl Field {
    /// All fields in declaration order.
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::SwiftCode,
        Field::Date,
        Field::Amount,
        Field::Currency,
        Field::OrdererName,
        Field::OrdererAddress,
        Field::OrdererId,
        Field::ReceiverAccount,
        Field::ReceiverName,
        Field::ReceiverAddress,
        Field::RemittanceInformation,
        Field::AdditionalInstruction,
        Field::ChargeDetail,
    ];

    /// The JSON key for this field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SwiftCode => "swiftCode",
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Currency => "currency",
            Self::OrdererName => "ordererName",
            Self::OrdererAddress => "ordererAddress",
            Self::OrdererId => "ordererId",
            Self::ReceiverAccount => "receiverAccount",
            Self::ReceiverName => "receiverName",
            Self::ReceiverAddress => "receiverAddress",
            Self::RemittanceInformation => "remittanceInformation",
            Self::AdditionalInstruction => "additionalInstruction",
            Self::ChargeDetail => "chargeDetail",
        }
    }

    /// Zero-based position in declaration order.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| TypeError::UnknownField(s.to_string()))
    }
}
