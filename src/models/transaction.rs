//! This file defines the type `Transaction`, the core type of the budgeting
//! part of the application.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are plain records: they are created by the caller, persisted
/// through [TransactionStore](crate::stores::TransactionStore), and never
/// mutated in place. The serialized form uses the field names of the original
/// application (`jarId`, `walletId`, `type`, `relatedTransactionId`) so that
/// stored payloads stay interchangeable with its backups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Caller-supplied identifier. The store performs no generation or
    /// uniqueness enforcement; see [Transaction::id_for] for the convention
    /// used across the app.
    pub id: String,

    /// The amount of money moved. Always positive; the direction is carried
    /// by `kind`.
    pub amount: f64,

    /// The jar the money was drawn from or allocated to. Transfer legs carry
    /// the [transfer marker](crate::transfer::TRANSFER_JAR_ID) instead of a
    /// real jar.
    pub jar_id: String,

    /// The wallet the money moved through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<String>,

    /// Free-form user note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// When the transaction happened. Persisted as an RFC 3339 string.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,

    /// Whether money came in or went out.
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Draft transactions are pending user review before being treated as
    /// final.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,

    /// The id of the opposite leg when this transaction is half of a
    /// transfer. The writer keeps the references mutual; the store does not
    /// check them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_transaction_id: Option<String>,
}

impl Transaction {
    /// The caller-generated id convention used across the app: the
    /// millisecond Unix timestamp of `date`, rendered as a decimal string.
    pub fn id_for(date: OffsetDateTime) -> String {
        unix_millis(date).to_string()
    }
}

/// The millisecond Unix timestamp of `date`.
pub(crate) fn unix_millis(date: OffsetDateTime) -> i64 {
    date.unix_timestamp() * 1000 + i64::from(date.millisecond())
}

/// The direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

/// Whether a transaction is final or still pending user review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Saved but awaiting review, e.g. an imported slip.
    Draft,
    /// Reviewed and final.
    Completed,
}

#[cfg(test)]
mod transaction_tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::{Transaction, TransactionKind, TransactionStatus};

    #[test]
    fn serializes_with_original_field_names() {
        let transaction = Transaction {
            id: "tx-1".to_owned(),
            amount: 500.0,
            jar_id: "necessities".to_owned(),
            wallet_id: Some("wallet-1".to_owned()),
            note: Some("Lunch".to_owned()),
            date: datetime!(2026-02-04 12:00 UTC),
            kind: TransactionKind::Expense,
            status: None,
            related_transaction_id: None,
        };

        let want = json!({
            "id": "tx-1",
            "amount": 500.0,
            "jarId": "necessities",
            "walletId": "wallet-1",
            "note": "Lunch",
            "date": "2026-02-04T12:00:00Z",
            "type": "expense",
        });

        let got = serde_json::to_value(&transaction).unwrap();

        assert_eq!(want, got);
    }

    #[test]
    fn absent_optional_fields_are_omitted() {
        let transaction = Transaction {
            id: "1".to_owned(),
            amount: 100.0,
            jar_id: "savings".to_owned(),
            wallet_id: None,
            note: None,
            date: datetime!(2026-01-16 10:00 UTC),
            kind: TransactionKind::Expense,
            status: None,
            related_transaction_id: None,
        };

        let got = serde_json::to_value(&transaction).unwrap();
        let object = got.as_object().unwrap();

        assert!(!object.contains_key("walletId"));
        assert!(!object.contains_key("note"));
        assert!(!object.contains_key("status"));
        assert!(!object.contains_key("relatedTransactionId"));
    }

    #[test]
    fn deserializes_original_payload() {
        let payload = r#"{
            "id": "tx-4",
            "amount": 1000,
            "jarId": "transfer",
            "walletId": "wallet-2",
            "note": "Transfer from Cash",
            "date": "2026-02-04T10:00:00Z",
            "type": "income",
            "status": "draft",
            "relatedTransactionId": "tx-3"
        }"#;

        let transaction: Transaction = serde_json::from_str(payload).unwrap();

        assert_eq!(transaction.id, "tx-4");
        assert_eq!(transaction.amount, 1000.0);
        assert_eq!(transaction.jar_id, "transfer");
        assert_eq!(transaction.wallet_id.as_deref(), Some("wallet-2"));
        assert_eq!(transaction.kind, TransactionKind::Income);
        assert_eq!(transaction.status, Some(TransactionStatus::Draft));
        assert_eq!(transaction.related_transaction_id.as_deref(), Some("tx-3"));
    }

    #[test]
    fn id_for_is_the_millisecond_timestamp() {
        let date = datetime!(2026-02-04 10:00:00.250 UTC);

        let want = (date.unix_timestamp() * 1000 + 250).to_string();

        assert_eq!(want, Transaction::id_for(date));
    }
}
