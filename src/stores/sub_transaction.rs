//! Implements the sub-transaction store: an uncapped, append-ordered
//! collection of receipt line items.

use crate::{Error, models::SubTransaction, storage::KeyValueStore};

/// The storage key holding the serialized sub-transaction collection.
const STORAGE_KEY: &str = "jarwise_sub_transactions";

/// Persists sub-transactions as one serialized collection in a
/// [KeyValueStore].
///
/// Unlike the transaction collection there is no size bound and no ordering
/// guarantee beyond plain append. Saving an item with an id that already
/// exists creates a duplicate row; callers own id uniqueness.
#[derive(Debug)]
pub struct SubTransactionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SubTransactionStore<S> {
    /// Create a store that persists through `storage`.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All stored sub-transactions in insertion order.
    ///
    /// Returns an empty vector when nothing has been stored yet. A stored
    /// payload that cannot be parsed as a sub-transaction array is logged as
    /// a warning and treated as empty.
    ///
    /// # Errors
    /// Returns an error if the storage backend fails.
    pub fn sub_transactions(&self) -> Result<Vec<SubTransaction>, Error> {
        let Some(stored) = self.storage.get(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&stored) {
            Ok(sub_transactions) => Ok(sub_transactions),
            Err(error) => {
                tracing::warn!("invalid sub-transaction data in storage: {}", error);
                Ok(Vec::new())
            }
        }
    }

    /// The sub-transactions belonging to the transaction `parent_id`, in
    /// their stored relative order.
    ///
    /// # Errors
    /// Returns an error if the storage backend fails.
    pub fn sub_transactions_by_parent(
        &self,
        parent_id: &str,
    ) -> Result<Vec<SubTransaction>, Error> {
        let sub_transactions = self
            .sub_transactions()?
            .into_iter()
            .filter(|item| item.parent_id == parent_id)
            .collect();

        Ok(sub_transactions)
    }

    /// Append `sub_transaction` to the end of the collection.
    ///
    /// # Errors
    /// Returns an error if the collection cannot be serialized or the
    /// storage backend fails.
    pub fn save(&mut self, sub_transaction: SubTransaction) -> Result<(), Error> {
        let mut sub_transactions = self.sub_transactions()?;

        sub_transactions.push(sub_transaction);

        self.write(&sub_transactions)
    }

    /// Remove the sub-transactions whose id matches `id`, leaving the rest
    /// in their original order.
    ///
    /// # Errors
    /// Returns an error if the collection cannot be serialized or the
    /// storage backend fails.
    pub fn delete(&mut self, id: &str) -> Result<(), Error> {
        let mut sub_transactions = self.sub_transactions()?;

        sub_transactions.retain(|item| item.id != id);

        self.write(&sub_transactions)
    }

    fn write(&mut self, sub_transactions: &[SubTransaction]) -> Result<(), Error> {
        let payload = serde_json::to_string(sub_transactions)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

        self.storage.set(STORAGE_KEY, &payload)
    }
}

#[cfg(test)]
mod sub_transaction_store_tests {
    use super::{STORAGE_KEY, SubTransactionStore};
    use crate::{
        models::SubTransaction,
        storage::{KeyValueStore, MemoryStore},
    };

    fn item(id: &str, parent_id: &str) -> SubTransaction {
        SubTransaction {
            id: id.to_owned(),
            parent_id: parent_id.to_owned(),
            description: "Milk".to_owned(),
            amount: 42.0,
            category: None,
        }
    }

    #[test]
    fn sub_transactions_is_empty_when_nothing_stored() {
        let store = SubTransactionStore::new(MemoryStore::new());

        assert_eq!(store.sub_transactions(), Ok(vec![]));
    }

    #[test]
    fn save_appends_to_the_end() {
        let mut store = SubTransactionStore::new(MemoryStore::new());

        store.save(item("1", "tx-1")).unwrap();
        store.save(item("2", "tx-1")).unwrap();

        let ids: Vec<String> = store
            .sub_transactions()
            .unwrap()
            .into_iter()
            .map(|item| item.id)
            .collect();

        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn save_with_repeated_id_creates_a_duplicate() {
        let mut store = SubTransactionStore::new(MemoryStore::new());

        store.save(item("1", "tx-1")).unwrap();
        store.save(item("1", "tx-1")).unwrap();

        assert_eq!(store.sub_transactions().unwrap().len(), 2);
    }

    #[test]
    fn by_parent_returns_exactly_the_matching_subset_in_order() {
        let mut store = SubTransactionStore::new(MemoryStore::new());

        store.save(item("1", "tx-1")).unwrap();
        store.save(item("2", "tx-2")).unwrap();
        store.save(item("3", "tx-1")).unwrap();

        let ids: Vec<String> = store
            .sub_transactions_by_parent("tx-1")
            .unwrap()
            .into_iter()
            .map(|item| item.id)
            .collect();

        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn by_parent_is_empty_for_unknown_parent() {
        let mut store = SubTransactionStore::new(MemoryStore::new());

        store.save(item("1", "tx-1")).unwrap();

        assert_eq!(store.sub_transactions_by_parent("tx-9"), Ok(vec![]));
    }

    #[test]
    fn delete_removes_only_the_matching_item() {
        let mut store = SubTransactionStore::new(MemoryStore::new());

        store.save(item("1", "tx-1")).unwrap();
        store.save(item("2", "tx-1")).unwrap();
        store.save(item("3", "tx-2")).unwrap();

        store.delete("2").unwrap();

        let ids: Vec<String> = store
            .sub_transactions()
            .unwrap()
            .into_iter()
            .map(|item| item.id)
            .collect();

        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn delete_of_unknown_id_leaves_the_collection_untouched() {
        let mut store = SubTransactionStore::new(MemoryStore::new());

        store.save(item("1", "tx-1")).unwrap();
        store.delete("9").unwrap();

        assert_eq!(store.sub_transactions().unwrap().len(), 1);
    }

    #[test]
    fn invalid_payload_is_treated_as_empty() {
        let mut storage = MemoryStore::new();
        storage.set(STORAGE_KEY, "not an array").unwrap();

        let store = SubTransactionStore::new(storage);

        assert_eq!(store.sub_transactions(), Ok(vec![]));
    }
}
