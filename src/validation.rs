//! Validates user-entered transaction and transfer form data before saving.
//!
//! Validation never fails with an [Error](crate::Error): the outcome is a
//! structured result carrying one message per rejected field, so a form can
//! show all problems at once.

use thiserror::Error;

/// The user-entered add-transaction form fields, before parsing.
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    /// The raw amount text.
    pub amount: String,
    /// The selected jar, or `None` when nothing was picked.
    pub jar_id: Option<String>,
    /// The selected wallet. Never validated.
    pub wallet_id: Option<String>,
    /// The note text. Never validated.
    pub note: String,
}

/// Why the amount field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    /// No usable amount was entered. A literal zero counts as "not entered"
    /// rather than as a too-small amount.
    #[error("กรุณากรอกจำนวนเงิน")]
    Missing,

    /// The input did not parse as a number.
    #[error("กรุณากรอกตัวเลขที่ถูกต้อง")]
    NotANumber,

    /// The amount parsed but was negative.
    #[error("จำนวนเงินต้องมากกว่า 0")]
    NotPositive,
}

/// Why the jar field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JarError {
    /// No jar was selected.
    #[error("กรุณาเลือก Jar")]
    Missing,
}

/// The outcome of [validate_transaction]. Field errors are independent and
/// can coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// The error for the amount field, if any.
    pub amount: Option<AmountError>,
    /// The error for the jar field, if any.
    pub jar: Option<JarError>,
}

impl ValidationResult {
    /// True when no field was rejected.
    pub fn is_valid(&self) -> bool {
        self.amount.is_none() && self.jar.is_none()
    }
}

/// Validate add-transaction form data.
///
/// The amount must be present, numeric, and greater than zero; a jar must be
/// selected; the note and wallet are always optional.
pub fn validate_transaction(input: &TransactionInput) -> ValidationResult {
    let mut result = ValidationResult::default();

    let amount = input.amount.trim();
    if amount.is_empty() {
        result.amount = Some(AmountError::Missing);
    } else {
        result.amount = match amount.parse::<f64>() {
            Err(_) => Some(AmountError::NotANumber),
            Ok(value) if value.is_nan() => Some(AmountError::NotANumber),
            Ok(value) if value == 0.0 => Some(AmountError::Missing),
            Ok(value) if value < 0.0 => Some(AmountError::NotPositive),
            Ok(_) => None,
        };
    }

    if input
        .jar_id
        .as_deref()
        .is_none_or(|jar_id| jar_id.trim().is_empty())
    {
        result.jar = Some(JarError::Missing);
    }

    result
}

/// The user-entered transfer form fields, before parsing.
#[derive(Debug, Clone, Default)]
pub struct TransferInput {
    /// The raw amount text.
    pub amount: String,
    /// The selected source wallet, or `None` when nothing was picked.
    pub from_wallet_id: Option<String>,
    /// The selected destination wallet, or `None` when nothing was picked.
    pub to_wallet_id: Option<String>,
}

/// Why the transfer amount field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransferAmountError {
    /// The amount was missing, non-numeric, or not greater than zero.
    #[error("Please enter a valid amount")]
    Invalid,
}

/// Why a transfer wallet selection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No source wallet was selected.
    #[error("Select source wallet")]
    MissingSource,

    /// No destination wallet was selected.
    #[error("Select destination wallet")]
    MissingDestination,

    /// The source and destination wallets are the same.
    #[error("Cannot transfer to same wallet")]
    SameWallet,
}

/// The outcome of [validate_transfer].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransferValidationResult {
    /// The error for the amount field, if any.
    pub amount: Option<TransferAmountError>,
    /// The error for the source wallet field, if any.
    pub from_wallet: Option<WalletError>,
    /// The error for the destination wallet field, if any.
    pub to_wallet: Option<WalletError>,
}

impl TransferValidationResult {
    /// True when no field was rejected.
    pub fn is_valid(&self) -> bool {
        self.amount.is_none() && self.from_wallet.is_none() && self.to_wallet.is_none()
    }
}

/// Validate transfer form data.
///
/// The amount must parse to a number greater than zero, both wallets must be
/// selected, and the destination must differ from the source. The same-wallet
/// error is reported on the destination field.
pub fn validate_transfer(input: &TransferInput) -> TransferValidationResult {
    let mut result = TransferValidationResult::default();

    let amount = input.amount.trim();
    if !amount.parse::<f64>().is_ok_and(|value| value > 0.0) {
        result.amount = Some(TransferAmountError::Invalid);
    }

    let from = non_blank(input.from_wallet_id.as_deref());
    let to = non_blank(input.to_wallet_id.as_deref());

    if from.is_none() {
        result.from_wallet = Some(WalletError::MissingSource);
    }

    result.to_wallet = match to {
        None => Some(WalletError::MissingDestination),
        Some(to) if from == Some(to) => Some(WalletError::SameWallet),
        Some(_) => None,
    };

    result
}

fn non_blank(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.trim().is_empty())
}


#[cfg(test)]
mod transfer_validation_tests {
    use super::{TransferAmountError, TransferInput, WalletError, validate_transfer};

    fn input(amount: &str, from: Option<&str>, to: Option<&str>) -> TransferInput {
        TransferInput {
            amount: amount.to_owned(),
            from_wallet_id: from.map(ToOwned::to_owned),
            to_wallet_id: to.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn missing_or_non_positive_amount_is_invalid() {
        for amount in ["", "0", "-5", "abc"] {
            let result = validate_transfer(&input(amount, Some("wallet-1"), Some("wallet-2")));

            assert_eq!(result.amount, Some(TransferAmountError::Invalid));
        }
    }

    #[test]
    fn missing_wallets_are_reported_per_field() {
        let result = validate_transfer(&input("100", None, None));

        assert_eq!(result.from_wallet, Some(WalletError::MissingSource));
        assert_eq!(result.to_wallet, Some(WalletError::MissingDestination));
    }

    #[test]
    fn same_wallet_transfer_is_rejected_on_the_destination() {
        let result = validate_transfer(&input("100", Some("wallet-1"), Some("wallet-1")));

        assert_eq!(result.from_wallet, None);
        assert_eq!(result.to_wallet, Some(WalletError::SameWallet));
        assert_eq!(
            result.to_wallet.unwrap().to_string(),
            "Cannot transfer to same wallet"
        );
    }

    #[test]
    fn valid_transfer_passes() {
        let result = validate_transfer(&input("100", Some("wallet-1"), Some("wallet-2")));

        assert!(result.is_valid());
    }
}
