//! Jarwise is the storage and validation core of a "jars" envelope-budgeting
//! app: money is allocated across category jars and wallets, transactions are
//! recorded against them, and wallet-to-wallet transfers are stored as linked
//! transaction pairs.
//!
//! All state lives in a flat key-value storage port ([storage::KeyValueStore])
//! as serialized collections, mirroring the local-storage layout of the
//! original application so persisted payloads stay interchangeable with its
//! backups.

#![warn(missing_docs)]

pub mod filters;
pub mod models;
pub mod storage;
pub mod stores;
pub mod transfer;
pub mod validation;

/// The errors that may occur in the storage layer.
///
/// Bad user input is never an `Error`: validation failures are reported as
/// structured results by the [validation] module, and a stored payload that
/// cannot be deserialized is logged and treated as an empty collection.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An unhandled/unexpected SQL error from the storage backend.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// A collection could not be serialized as JSON before being written.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", error);
        Error::SqlError(error)
    }
}
