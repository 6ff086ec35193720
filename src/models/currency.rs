//! Defines the fixed set of display currencies.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The currencies amounts can be displayed in.
///
/// The set is fixed; preferences stored with a code outside it fall back to
/// the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// Thai baht.
    Thb,
    /// United States dollar.
    Usd,
    /// Euro.
    Eur,
    /// Japanese yen.
    Jpy,
    /// Pound sterling.
    Gbp,
}

impl CurrencyCode {
    /// Every supported currency, in display order.
    pub const ALL: [CurrencyCode; 5] = [
        CurrencyCode::Thb,
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Jpy,
        CurrencyCode::Gbp,
    ];

    /// The ISO 4217 code, as stored in the currency preference.
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Thb => "THB",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Gbp => "GBP",
        }
    }

    /// The symbol shown before formatted amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Thb => "฿",
            CurrencyCode::Usd => "$",
            CurrencyCode::Eur => "€",
            CurrencyCode::Jpy => "¥",
            CurrencyCode::Gbp => "£",
        }
    }

    /// Parse a stored code, or `None` if it is not one of the fixed set.
    pub fn from_code(code: &str) -> Option<Self> {
        CurrencyCode::ALL
            .into_iter()
            .find(|currency| currency.code() == code)
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        CurrencyCode::Thb
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
