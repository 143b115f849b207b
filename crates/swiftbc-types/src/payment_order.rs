use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// A remittance order recorded on the ledger.
///
/// The record is assembled once and never mutated; fields are exposed
/// through read-only accessors. Identity is the `swiftCode` alone: two
/// orders with the same reference number compare equal and hash equally
/// even when their other fields differ.
///
/// The serde representation is the ledger wire format: a flat JSON object
/// whose keys are the [`Field`] wire names in declaration order. Unknown
/// keys are rejected on decode.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PaymentOrder {
    swift_code: String,
    date: String,
    amount: String,
    currency: String,
    orderer_name: String,
    orderer_address: String,
    orderer_id: String,
    receiver_account: String,
    receiver_name: String,
    receiver_address: String,
    remittance_information: String,
    additional_instruction: String,
    charge_detail: String,
}

impl PaymentOrder {
    /// Build a payment order from its thirteen fields, in declaration order.
    ///
    /// No validation or coercion happens here; callers that accept external
    /// input validate before constructing.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        swift_code: impl Into<String>,
        date: impl Into<String>,
        amount: impl Into<String>,
        currency: impl Into<String>,
        orderer_name: impl Into<String>,
        orderer_address: impl Into<String>,
        orderer_id: impl Into<String>,
        receiver_account: impl Into<String>,
        receiver_name: impl Into<String>,
        receiver_address: impl Into<String>,
        remittance_information: impl Into<String>,
        additional_instruction: impl Into<String>,
        charge_detail: impl Into<String>,
    ) -> Self {
        Self {
            swift_code: swift_code.into(),
            date: date.into(),
            amount: amount.into(),
            currency: currency.into(),
            orderer_name: orderer_name.into(),
            orderer_address: orderer_address.into(),
            orderer_id: orderer_id.into(),
            receiver_account: receiver_account.into(),
            receiver_name: receiver_name.into(),
            receiver_address: receiver_address.into(),
            remittance_information: remittance_information.into(),
            additional_instruction: additional_instruction.into(),
            charge_detail: charge_detail.into(),
        }
    }

    pub fn swift_code(&self) -> &str {
        &self.swift_code
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn orderer_name(&self) -> &str {
        &self.orderer_name
    }

    pub fn orderer_address(&self) -> &str {
        &self.orderer_address
    }

    pub fn orderer_id(&self) -> &str {
        &self.orderer_id
    }

    pub fn receiver_account(&self) -> &str {
        &self.receiver_account
    }

    pub fn receiver_name(&self) -> &str {
        &self.receiver_name
    }

    pub fn receiver_address(&self) -> &str {
        &self.receiver_address
    }

    pub fn remittance_information(&self) -> &str {
        &self.remittance_information
    }

    pub fn additional_instruction(&self) -> &str {
        &self.additional_instruction
    }

    pub fn charge_detail(&self) -> &str {
        &self.charge_detail
    }

    /// Look up a field value by name.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::SwiftCode => &self.swift_code,
            Field::Date => &self.date,
            Field::Amount => &self.amount,
            Field::Currency => &self.currency,
            Field::OrdererName => &self.orderer_name,
            Field::OrdererAddress => &self.orderer_address,
            Field::OrdererId => &self.orderer_id,
            Field::ReceiverAccount => &self.receiver_account,
            Field::ReceiverName => &self.receiver_name,
            Field::ReceiverAddress => &self.receiver_address,
            Field::RemittanceInformation => &self.remittance_information,
            Field::AdditionalInstruction => &self.additional_instruction,
            Field::ChargeDetail => &self.charge_detail,
        }
    }

    /// Returns `true` if every field of `other` matches this order, not just
    /// the key.
    pub fn same_content(&self, other: &Self) -> bool {
        Field::ALL
            .into_iter()
            .all(|field| self.get(field) == other.get(field))
    }
}

impl PartialEq for PaymentOrder {
    fn eq(&self, other: &Self) -> bool {
        self.swift_code == other.swift_code
    }
}

impl Eq for PaymentOrder {}

impl Hash for PaymentOrder {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with `eq`: key only.
        self.swift_code.hash(state);
    }
}

impl fmt::Display for PaymentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PaymentOrder [")?;
        for (i, field) in Field::ALL.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}={}", self.get(field))?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn order_one() -> PaymentOrder {
        PaymentOrder::new(
            "paymentOrder1", "20210121", "70000", "KRW", "테스트1", "서울어딘가", "orderer1",
            "010101010101", "receiver1", "미국어딘가", "원화를 보낸다", "재주껏 바꿔써라", "1",
        )
    }

    fn order_two() -> PaymentOrder {
        PaymentOrder::new(
            "paymentOrder2", "20210121", "100000", "KRW", "테스트2", "미국어딘가", "orderer2",
            "101010101010", "receiver2", "한국어딘가", "원화를 보낸다", "편하지?", "2",
        )
    }

    fn hash_of(order: &PaymentOrder) -> u64 {
        let mut hasher = DefaultHasher::new();
        order.hash(&mut hasher);
        hasher.finish()
    }

    // -----------------------------------------------------------------------
    // Equality
    // -----------------------------------------------------------------------

    #[test]
    fn equality_is_reflexive() {
        let order = order_one();
        assert_eq!(order, order);
    }

    #[test]
    fn equality_is_symmetric() {
        let a = order_one();
        let b = order_one();
        assert_eq!(a, b);
        assert_eq!(b, a);
    }

    #[test]
    fn equality_is_transitive() {
        let a = order_one();
        let b = order_one();
        let c = order_one();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a, c);
    }

    #[test]
    fn different_keys_are_unequal() {
        assert_ne!(order_one(), order_two());
    }

    #[test]
    fn same_key_different_content_is_equal() {
        let a = order_one();
        let b = PaymentOrder::new(
            "paymentOrder1", "20991231", "1", "USD", "x", "x", "x", "x", "x", "x", "x", "x", "x",
        );
        assert_eq!(a, b);
        assert!(!a.same_content(&b));
    }

    #[test]
    fn present_never_equals_absent() {
        assert_ne!(Some(order_one()), None);
    }

    // -----------------------------------------------------------------------
    // Hashing
    // -----------------------------------------------------------------------

    #[test]
    fn hash_agrees_with_equality() {
        let a = order_one();
        let b = PaymentOrder::new(
            "paymentOrder1", "d", "a", "c", "n", "a", "i", "r", "n", "a", "r", "a", "c",
        );
        assert_eq!(hash_of(&a), hash_of(&b));

        let set: HashSet<PaymentOrder> = [a, b, order_two()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[test]
    fn accessors_return_constructor_values() {
        let order = order_one();
        assert_eq!(order.swift_code(), "paymentOrder1");
        assert_eq!(order.date(), "20210121");
        assert_eq!(order.amount(), "70000");
        assert_eq!(order.currency(), "KRW");
        assert_eq!(order.orderer_name(), "테스트1");
        assert_eq!(order.orderer_address(), "서울어딘가");
        assert_eq!(order.orderer_id(), "orderer1");
        assert_eq!(order.receiver_account(), "010101010101");
        assert_eq!(order.receiver_name(), "receiver1");
        assert_eq!(order.receiver_address(), "미국어딘가");
        assert_eq!(order.remittance_information(), "원화를 보낸다");
        assert_eq!(order.additional_instruction(), "재주껏 바꿔써라");
        assert_eq!(order.charge_detail(), "1");
    }

    #[test]
    fn get_by_field_matches_accessors() {
        let order = order_two();
        assert_eq!(order.get(Field::SwiftCode), order.swift_code());
        assert_eq!(order.get(Field::Amount), "100000");
        assert_eq!(order.get(Field::AdditionalInstruction), "편하지?");
        assert_eq!(order.get(Field::ChargeDetail), "2");
    }

    // -----------------------------------------------------------------------
    // Serde shape
    // -----------------------------------------------------------------------

    #[test]
    fn serializes_flat_object_in_declaration_order() {
        let json = serde_json::to_string(&order_one()).unwrap();
        let mut last = 0;
        for field in Field::ALL {
            let pos = json
                .find(&format!("\"{}\":", field.as_str()))
                .expect("every field is present");
            assert!(pos >= last, "{field} out of order");
            last = pos;
        }

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), Field::ALL.len());
        assert!(object.values().all(|v| v.is_string()));
    }

    #[test]
    fn rejects_unknown_keys() {
        let mut value = serde_json::to_value(order_one()).unwrap();
        value["extra"] = serde_json::Value::String("nope".into());
        assert!(serde_json::from_value::<PaymentOrder>(value).is_err());
    }

    #[test]
    fn rejects_missing_keys() {
        let mut value = serde_json::to_value(order_one()).unwrap();
        value.as_object_mut().unwrap().remove("chargeDetail");
        assert!(serde_json::from_value::<PaymentOrder>(value).is_err());
    }

    // -----------------------------------------------------------------------
    // Display
    // -----------------------------------------------------------------------

    #[test]
    fn display_lists_fields() {
        let display = format!("{}", order_one());
        assert!(display.starts_with("PaymentOrder [swiftCode=paymentOrder1, date=20210121"));
        assert!(display.ends_with("chargeDetail=1]"));
    }
}
