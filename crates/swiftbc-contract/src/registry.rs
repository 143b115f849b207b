use std::collections::BTreeMap;

use serde_json::json;
use swiftbc_state::LedgerState;
use swiftbc_types::{Field, PaymentOrder};
use tracing::{debug, warn};

use crate::args::PaymentOrderArgs;
use crate::config::ContractConfig;
use crate::context::{Intent, TransactionContext};
use crate::contract::SwiftBc;
use crate::error::{ContractError, ContractResult};

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Value returned by an invoked operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Empty,
    PaymentOrder(PaymentOrder),
    PaymentOrders(Vec<PaymentOrder>),
    Bool(bool),
}

impl Response {
    /// JSON payload returned to the caller. `Empty` has an empty payload.
    pub fn to_payload(&self) -> ContractResult<Vec<u8>> {
        let encoded = match self {
            Self::Empty => return Ok(Vec::new()),
            Self::PaymentOrder(order) => serde_json::to_vec(order),
            Self::PaymentOrders(orders) => serde_json::to_vec(orders),
            Self::Bool(value) => serde_json::to_vec(value),
        };
        encoded.map_err(|e| ContractError::Encoding(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Transaction table
// ---------------------------------------------------------------------------

/// Handler signature: the contract, a live context, and positional arguments.
pub type Handler =
    fn(&SwiftBc, &mut TransactionContext<'_>, &[String]) -> ContractResult<Response>;

/// A registered operation.
#[derive(Clone, Copy)]
pub struct TransactionDef {
    pub name: &'static str,
    pub intent: Intent,
    /// Positional parameters, published in the contract metadata.
    pub parameters: &'static [Field],
    pub handler: Handler,
}

impl std::fmt::Debug for TransactionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionDef")
            .field("name", &self.name)
            .field("intent", &self.intent)
            .field("parameters", &self.parameters)
            .finish()
    }
}

fn swift_code_arg(args: &[String]) -> ContractResult<&str> {
    match args.first() {
        Some(code) => Ok(code.as_str()),
        None => Err(ContractError::MissingParameter {
            field: Field::SwiftCode,
        }),
    }
}

fn init_ledger(
    contract: &SwiftBc,
    ctx: &mut TransactionContext<'_>,
    _args: &[String],
) -> ContractResult<Response> {
    contract.init_ledger(ctx)?;
    Ok(Response::Empty)
}

fn create_payment_order(
    contract: &SwiftBc,
    ctx: &mut TransactionContext<'_>,
    args: &[String],
) -> ContractResult<Response> {
    let order = contract.create_payment_order(ctx, PaymentOrderArgs::from_positional(args))?;
    Ok(Response::PaymentOrder(order))
}

fn read_payment_order(
    contract: &SwiftBc,
    ctx: &mut TransactionContext<'_>,
    args: &[String],
) -> ContractResult<Response> {
    let order = contract.read_payment_order(ctx, swift_code_arg(args)?)?;
    Ok(Response::PaymentOrder(order))
}

fn payment_order_exists(
    contract: &SwiftBc,
    ctx: &mut TransactionContext<'_>,
    args: &[String],
) -> ContractResult<Response> {
    let exists = contract.payment_order_exists(ctx, swift_code_arg(args)?)?;
    Ok(Response::Bool(exists))
}

fn get_all_payment_orders(
    contract: &SwiftBc,
    ctx: &mut TransactionContext<'_>,
    _args: &[String],
) -> ContractResult<Response> {
    Ok(Response::PaymentOrders(contract.get_all_payment_orders(ctx)?))
}

const DEFAULT_TRANSACTIONS: [TransactionDef; 5] = [
    TransactionDef {
        name: "InitLedger",
        intent: Intent::Submit,
        parameters: &[],
        handler: init_ledger,
    },
    TransactionDef {
        name: "CreatePaymentOrder",
        intent: Intent::Submit,
        parameters: &Field::ALL,
        handler: create_payment_order,
    },
    TransactionDef {
        name: "ReadPaymentOrder",
        intent: Intent::Evaluate,
        parameters: &[Field::SwiftCode],
        handler: read_payment_order,
    },
    TransactionDef {
        name: "PaymentOrderExists",
        intent: Intent::Evaluate,
        parameters: &[Field::SwiftCode],
        handler: payment_order_exists,
    },
    TransactionDef {
        name: "GetAllPaymentOrders",
        intent: Intent::Evaluate,
        parameters: &[],
        handler: get_all_payment_orders,
    },
];

// ---------------------------------------------------------------------------
// ContractRegistry
// ---------------------------------------------------------------------------

/// Dispatch table from operation name to handler, built once at startup.
///
/// Names resolve either bare (`ReadPaymentOrder`, only for the default
/// contract) or qualified with the contract name (`basic:ReadPaymentOrder`).
pub struct ContractRegistry {
    config: ContractConfig,
    contract: SwiftBc,
    transactions: BTreeMap<&'static str, TransactionDef>,
}

impl ContractRegistry {
    /// Create a registry with no operations registered.
    pub fn new(config: ContractConfig) -> ContractResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            contract: SwiftBc::new(),
            transactions: BTreeMap::new(),
        })
    }

    /// Create a registry with every payment order operation registered.
    pub fn with_default_transactions(config: ContractConfig) -> ContractResult<Self> {
        let mut registry = Self::new(config)?;
        for def in DEFAULT_TRANSACTIONS {
            registry.register(def);
        }
        Ok(registry)
    }

    /// Add or replace an operation.
    pub fn register(&mut self, def: TransactionDef) {
        self.transactions.insert(def.name, def);
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Registered operations in name order.
    pub fn transactions(&self) -> impl Iterator<Item = &TransactionDef> {
        self.transactions.values()
    }

    /// Look up an operation by bare or qualified name.
    pub fn resolve(&self, function: &str) -> ContractResult<&TransactionDef> {
        let bare = match function.split_once(':') {
            Some((contract, name)) if contract == self.config.name => Some(name),
            Some(_) => None,
            None if self.config.default => Some(function),
            None => None,
        };
        bare.and_then(|name| self.transactions.get(name))
            .ok_or_else(|| ContractError::UndefinedFunction(function.to_string()))
    }

    /// Run `function` in a fresh transaction against `state`.
    ///
    /// Submit operations that succeed have their read/write set committed;
    /// on any failure nothing reaches the ledger.
    pub fn invoke(
        &self,
        state: &dyn LedgerState,
        function: &str,
        args: &[String],
    ) -> ContractResult<Response> {
        let def = self.resolve(function)?;
        let mut ctx = TransactionContext::new(state, def.intent);
        debug!(
            tx_id = %ctx.tx_id(),
            function = def.name,
            intent = %def.intent,
            args = args.len(),
            "invoking transaction"
        );

        let response = match (def.handler)(&self.contract, &mut ctx, args) {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    tx_id = %ctx.tx_id(),
                    function = def.name,
                    code = err.code().map(|c| c.as_str()),
                    error = %err,
                    "transaction failed"
                );
                return Err(err);
            }
        };

        let tx_id = ctx.tx_id();
        if let Err(err) = ctx.commit() {
            warn!(
                tx_id = %tx_id,
                function = def.name,
                error = %err,
                "transaction commit failed"
            );
            return Err(err);
        }
        Ok(response)
    }

    /// Contract name, info block, and operation list as JSON.
    pub fn metadata(&self) -> serde_json::Value {
        let transactions: Vec<_> = self
            .transactions()
            .map(|def| {
                json!({
                    "name": def.name,
                    "intent": def.intent,
                    "parameters": def.parameters,
                })
            })
            .collect();
        json!({
            "name": self.config.name,
            "default": self.config.default,
            "info": self.config.info,
            "transactions": transactions,
        })
    }
}

impl std::fmt::Debug for ContractRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractRegistry")
            .field("name", &self.config.name)
            .field("transaction_count", &self.transactions.len())
            .finish()
    }
}
