//! Defines the domain models: transactions, receipt line items, the jar and
//! wallet allocation entities, and the display currency.

mod allocation;
mod currency;
mod sub_transaction;
mod transaction;

pub use allocation::{
    AllocationColor, AllocationIcon, Jar, Wallet, default_jars, default_wallets, jar_details,
};
pub use currency::CurrencyCode;
pub use sub_transaction::SubTransaction;
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
pub(crate) use transaction::unix_millis;
