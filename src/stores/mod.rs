//! Contains the stores that persist the domain [models](crate::models)
//! through the key-value [storage port](crate::storage::KeyValueStore).

mod settings;
mod sub_transaction;
mod transaction;

pub use settings::SettingsStore;
pub use sub_transaction::SubTransactionStore;
pub use transaction::{MAX_TRANSACTIONS, TransactionStore};
