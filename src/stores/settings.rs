//! Implements the settings store for user preferences.

use crate::{Error, models::CurrencyCode, storage::KeyValueStore};

/// The storage key holding the display currency preference.
const CURRENCY_KEY: &str = "settings.currency";

/// Persists user preferences in a [KeyValueStore].
#[derive(Debug)]
pub struct SettingsStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Create a store that persists through `storage`.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The preferred display currency.
    ///
    /// Falls back to [CurrencyCode::default] when no preference has been
    /// stored or the stored value is not one of the supported codes.
    ///
    /// # Errors
    /// Returns an error if the storage backend fails.
    pub fn currency(&self) -> Result<CurrencyCode, Error> {
        let currency = self
            .storage
            .get(CURRENCY_KEY)?
            .and_then(|code| CurrencyCode::from_code(&code))
            .unwrap_or_default();

        Ok(currency)
    }

    /// Store `currency` as the preferred display currency.
    ///
    /// # Errors
    /// Returns an error if the storage backend fails.
    pub fn set_currency(&mut self, currency: CurrencyCode) -> Result<(), Error> {
        self.storage.set(CURRENCY_KEY, currency.code())
    }
}
