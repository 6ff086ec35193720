//! Implements a SQLite backed key-value store.

use std::{
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use rusqlite::Connection;

use crate::{Error, storage::KeyValueStore};

/// Stores key-value pairs in a single `kv` table of a SQLite database.
///
/// This backend plays the role browser local storage plays in the original
/// application: one durable, always-available string namespace. Cloning the
/// store shares the underlying connection, so every store built over the
/// clones reads and writes the same database.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open the database at `path`, creating it and the `kv` table if needed.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::new(Connection::open(path)?)
    }

    /// Open a private in-memory database. The data is discarded on drop.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open_in_memory() -> Result<Self, Error> {
        Self::new(Connection::open_in_memory()?)
    }

    fn new(connection: Connection) -> Result<Self, Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
                )",
            (),
        )?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|_| Error::DatabaseLockError)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let connection = self.connection()?;

        let result = connection
            .prepare("SELECT value FROM kv WHERE key = :key")?
            .query_row(&[(":key", &key)], |row| row.get(0));

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let connection = self.connection()?;

        connection.execute(
            "INSERT INTO kv (key, value) VALUES (:key, :value)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            &[(":key", &key), (":value", &value)],
        )?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        let connection = self.connection()?;

        connection.execute("DELETE FROM kv WHERE key = :key", &[(":key", &key)])?;

        Ok(())
    }
}
