use swiftbc_types::{Field, PaymentOrder, FIELD_COUNT};

use crate::error::{ContractError, ContractResult};

/// Caller-supplied arguments for creating a payment order.
///
/// Each field may be absent (`None`), which is how a null or missing
/// argument is represented. Nothing is checked until [`Self::validate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentOrderArgs {
    values: [Option<String>; FIELD_COUNT],
}

impl PaymentOrderArgs {
    /// Arguments with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map positional arguments onto fields in declaration order.
    ///
    /// Missing trailing arguments stay absent; arguments beyond the
    /// thirteenth are ignored.
    pub fn from_positional<S: AsRef<str>>(args: &[S]) -> Self {
        let mut out = Self::new();
        for (field, value) in Field::ALL.into_iter().zip(args) {
            out.set(field, Some(value.as_ref().to_string()));
        }
        out
    }

    pub fn set(&mut self, field: Field, value: Option<String>) {
        self.values[field.index()] = value;
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    /// Builder-style [`Self::set`] with a present value.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    /// Builder-style [`Self::set`] clearing the field.
    pub fn without(mut self, field: Field) -> Self {
        self.set(field, None);
        self
    }

    pub fn swift_code(&self) -> Option<&str> {
        self.get(Field::SwiftCode)
    }

    /// Check every field in declaration order.
    ///
    /// Fails with [`ContractError::MissingParameter`] naming the first field
    /// that is absent or empty, or `amount` when it is the literal `"0"`.
    pub fn validate(&self) -> ContractResult<()> {
        for field in Field::ALL {
            let missing = match self.get(field) {
                None | Some("") => true,
                Some("0") => field == Field::Amount,
                Some(_) => false,
            };
            if missing {
                return Err(ContractError::MissingParameter { field });
            }
        }
        Ok(())
    }

    /// Validate and assemble the record.
    pub fn into_order(self) -> ContractResult<PaymentOrder> {
        self.validate()?;
        Ok(self.into_order_unchecked())
    }

    pub(crate) fn into_order_unchecked(self) -> PaymentOrder {
        let [
            swift_code,
            date,
            amount,
            currency,
            orderer_name,
            orderer_address,
            orderer_id,
            receiver_account,
            receiver_name,
            receiver_address,
            remittance_information,
            additional_instruction,
            charge_detail,
        ] = self.values.map(Option::unwrap_or_default);
        PaymentOrder::new(
            swift_code,
            date,
            amount,
            currency,
            orderer_name,
            orderer_address,
            orderer_id,
            receiver_account,
            receiver_name,
            receiver_address,
            remittance_information,
            additional_instruction,
            charge_detail,
        )
    }
}

impl From<&PaymentOrder> for PaymentOrderArgs {
    fn from(order: &PaymentOrder) -> Self {
        let mut args = Self::new();
        for field in Field::ALL {
            args.set(field, Some(order.get(field).to_string()));
        }
        args
    }
}
