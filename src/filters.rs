//! Formatting helpers for displaying money amounts.

use numfmt::{Formatter, Precision};

use crate::models::CurrencyCode;

/// Format `amount` with the symbol of `currency` and two decimal places,
/// e.g. `฿1,234.50` or `-€5.00`.
pub fn format_amount(amount: f64, currency: CurrencyCode) -> String {
    let symbol = currency.symbol();

    let mut formatted_string = if amount < 0.0 {
        Formatter::currency(&format!("-{symbol}"))
            .unwrap()
            .precision(Precision::Decimals(2))
            .fmt_string(amount.abs())
    } else if amount > 0.0 {
        Formatter::currency(symbol)
            .unwrap()
            .precision(Precision::Decimals(2))
            .fmt_string(amount)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        format!("{symbol}0.00")
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}
