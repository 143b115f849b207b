use swiftbc_types::PaymentOrder;
use tracing::{debug, info, warn};

use crate::args::PaymentOrderArgs;
use crate::codec;
use crate::context::TransactionContext;
use crate::error::{ContractError, ContractResult};
use crate::seed;

/// The payment order contract.
///
/// Stateless: every operation works only through the transaction context it
/// is handed, so one instance can serve any number of transactions.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwiftBc;

impl SwiftBc {
    pub fn new() -> Self {
        Self
    }

    /// Create the two sample orders, `paymentOrder1` then `paymentOrder2`.
    pub fn init_ledger(&self, ctx: &mut TransactionContext<'_>) -> ContractResult<()> {
        for order in seed::sample_orders() {
            self.create_payment_order(ctx, PaymentOrderArgs::from(&order))?;
        }
        info!(tx_id = %ctx.tx_id(), "ledger seeded with sample payment orders");
        Ok(())
    }

    /// Validate `args` and record a new payment order under its `swiftCode`.
    ///
    /// Fails with `MissingParameter` before touching the ledger, or with
    /// `AlreadyExists` when the key already holds a value. Exactly one write
    /// is buffered on success.
    pub fn create_payment_order(
        &self,
        ctx: &mut TransactionContext<'_>,
        args: PaymentOrderArgs,
    ) -> ContractResult<PaymentOrder> {
        let order = args.into_order()?;

        if self.payment_order_exists(ctx, order.swift_code())? {
            warn!(
                tx_id = %ctx.tx_id(),
                swift_code = order.swift_code(),
                "payment order already exists"
            );
            return Err(ContractError::AlreadyExists {
                swift_code: order.swift_code().to_string(),
            });
        }

        let encoded = codec::encode(&order)?;
        ctx.put_state(order.swift_code(), encoded)?;
        debug!(tx_id = %ctx.tx_id(), swift_code = order.swift_code(), "payment order created");
        Ok(order)
    }

    /// Read back the payment order stored under `swift_code`.
    pub fn read_payment_order(
        &self,
        ctx: &mut TransactionContext<'_>,
        swift_code: &str,
    ) -> ContractResult<PaymentOrder> {
        match ctx.get_state(swift_code)? {
            Some(bytes) if !bytes.is_empty() => codec::decode(swift_code, &bytes),
            _ => {
                warn!(tx_id = %ctx.tx_id(), swift_code, "payment order does not exist");
                Err(ContractError::NotFound {
                    swift_code: swift_code.to_string(),
                })
            }
        }
    }

    /// Returns `true` if a non-empty value is stored under `swift_code`.
    pub fn payment_order_exists(
        &self,
        ctx: &mut TransactionContext<'_>,
        swift_code: &str,
    ) -> ContractResult<bool> {
        Ok(ctx
            .get_state(swift_code)?
            .is_some_and(|bytes| !bytes.is_empty()))
    }

    /// Every payment order on the ledger, in key order.
    pub fn get_all_payment_orders(
        &self,
        ctx: &mut TransactionContext<'_>,
    ) -> ContractResult<Vec<PaymentOrder>> {
        ctx.state_by_range("", "")?
            .into_iter()
            .filter(|(_, bytes)| !bytes.is_empty())
            .map(|(key, bytes)| codec::decode(&key, &bytes))
            .collect()
    }
}
