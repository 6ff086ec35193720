//! Implements the transaction store: one bounded, newest-first collection
//! serialized under a single storage key.

use crate::{Error, models::Transaction, storage::KeyValueStore};

/// The storage key holding the serialized transaction collection.
const STORAGE_KEY: &str = "jarwise_transactions";

/// The number of transactions kept. Saving past this bound silently drops
/// the oldest entries.
pub const MAX_TRANSACTIONS: usize = 100;

/// Persists transactions as one serialized collection in a
/// [KeyValueStore].
///
/// The collection is newest-first: after any sequence of saves, index 0 is
/// the most recently saved transaction and the relative order of older
/// entries is preserved. There is no update or single-record delete; records
/// only leave the store through the size bound or [TransactionStore::clear].
#[derive(Debug)]
pub struct TransactionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> TransactionStore<S> {
    /// Create a store that persists through `storage`.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All stored transactions, newest first.
    ///
    /// Returns an empty vector when nothing has been stored yet. A stored
    /// payload that cannot be parsed as a transaction array is logged as a
    /// warning and treated as empty rather than surfaced to the caller.
    ///
    /// # Errors
    /// Returns an error if the storage backend fails.
    pub fn transactions(&self) -> Result<Vec<Transaction>, Error> {
        let Some(stored) = self.storage.get(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&stored) {
            Ok(transactions) => Ok(transactions),
            Err(error) => {
                tracing::warn!("invalid transaction data in storage: {}", error);
                Ok(Vec::new())
            }
        }
    }

    /// Save `transaction` at the front of the collection.
    ///
    /// The collection is then truncated to the [MAX_TRANSACTIONS] most
    /// recent entries and written back as one payload.
    ///
    /// # Errors
    /// Returns an error if the collection cannot be serialized or the
    /// storage backend fails.
    pub fn save(&mut self, transaction: Transaction) -> Result<(), Error> {
        let mut transactions = self.transactions()?;

        transactions.insert(0, transaction);
        transactions.truncate(MAX_TRANSACTIONS);

        self.write(&transactions)
    }

    /// Save both legs of a transfer in a single write.
    ///
    /// The expense leg ends up at index 0 ahead of the income leg, so the
    /// visible leg of the newest transfer is the first transaction. The size
    /// bound applies across both inserts.
    ///
    /// # Errors
    /// Returns an error if the collection cannot be serialized or the
    /// storage backend fails.
    pub fn save_transfer(&mut self, expense: Transaction, income: Transaction) -> Result<(), Error> {
        let mut transactions = self.transactions()?;

        transactions.insert(0, income);
        transactions.insert(0, expense);
        transactions.truncate(MAX_TRANSACTIONS);

        self.write(&transactions)
    }

    /// Remove the stored collection entirely.
    ///
    /// A subsequent [TransactionStore::transactions] returns an empty vector.
    ///
    /// # Errors
    /// Returns an error if the storage backend fails.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.storage.remove(STORAGE_KEY)
    }

    fn write(&mut self, transactions: &[Transaction]) -> Result<(), Error> {
        let payload = serde_json::to_string(transactions)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

        self.storage.set(STORAGE_KEY, &payload)
    }
}
