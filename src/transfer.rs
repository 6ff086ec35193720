//! Composes wallet-to-wallet transfers as linked transaction pairs, and
//! provides the display-side helpers that collapse a pair back to one
//! visible entry.

use time::OffsetDateTime;

use crate::models::{Transaction, TransactionKind, Wallet, unix_millis};

/// The jar marker shared by both legs of a transfer.
pub const TRANSFER_JAR_ID: &str = "transfer";

/// Create the linked expense and income legs for moving `amount` from
/// `from_wallet` to `to_wallet`.
///
/// Both legs share the amount, the date, and the [TRANSFER_JAR_ID] marker,
/// and reference each other through `related_transaction_id`. Their ids are
/// the millisecond timestamp of `date` and that value plus one. When `note`
/// is empty, each leg gets a note naming the opposite wallet.
///
/// The legs are returned as `(expense, income)`; persist them together with
/// [TransactionStore::save_transfer](crate::stores::TransactionStore::save_transfer)
/// so they enter the store as a pair.
pub fn compose_transfer(
    amount: f64,
    from_wallet: &Wallet,
    to_wallet: &Wallet,
    date: OffsetDateTime,
    note: Option<&str>,
) -> (Transaction, Transaction) {
    let timestamp = unix_millis(date);
    let expense_id = timestamp.to_string();
    let income_id = (timestamp + 1).to_string();

    let note = note.filter(|note| !note.trim().is_empty());

    let expense = Transaction {
        id: expense_id.clone(),
        amount,
        jar_id: TRANSFER_JAR_ID.to_owned(),
        wallet_id: Some(from_wallet.id.clone()),
        note: Some(note.map_or_else(|| format!("Transfer to {}", to_wallet.name), ToOwned::to_owned)),
        date,
        kind: TransactionKind::Expense,
        status: None,
        related_transaction_id: Some(income_id.clone()),
    };

    let income = Transaction {
        id: income_id,
        amount,
        jar_id: TRANSFER_JAR_ID.to_owned(),
        wallet_id: Some(to_wallet.id.clone()),
        note: Some(
            note.map_or_else(
                || format!("Transfer from {}", from_wallet.name),
                ToOwned::to_owned,
            ),
        ),
        date,
        kind: TransactionKind::Income,
        status: None,
        related_transaction_id: Some(expense_id),
    };

    (expense, income)
}

/// Drop the income legs of linked transfers, keeping everything else.
///
/// List views show a transfer as a single entry, its expense leg. The
/// projection is pure and idempotent: applying it twice yields the same
/// result as applying it once.
pub fn filter_visible_transactions(transactions: Vec<Transaction>) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|transaction| {
            !(transaction.kind == TransactionKind::Income
                && transaction.related_transaction_id.is_some())
        })
        .collect()
}

/// Find the opposite leg of `transaction` in `all_transactions`.
///
/// Returns `None` when `transaction` has no related id, or when the
/// referenced id is not present in the given collection. A dangling
/// reference is treated as "no link", not as an error.
pub fn find_linked_transaction<'a>(
    transaction: &Transaction,
    all_transactions: &'a [Transaction],
) -> Option<&'a Transaction> {
    let related_id = transaction.related_transaction_id.as_deref()?;

    all_transactions
        .iter()
        .find(|candidate| candidate.id == related_id)
}

#[cfg(test)]
mod transfer_tests {
    use time::macros::datetime;

    use super::{
        TRANSFER_JAR_ID, compose_transfer, filter_visible_transactions, find_linked_transaction,
    };
    use crate::models::{Transaction, TransactionKind, default_wallets};

    fn transaction(id: &str, kind: TransactionKind, related_id: Option<&str>) -> Transaction {
        Transaction {
            id: id.to_owned(),
            amount: 1000.0,
            jar_id: "necessities".to_owned(),
            wallet_id: Some("wallet-1".to_owned()),
            note: None,
            date: datetime!(2026-02-04 10:00 UTC),
            kind,
            status: None,
            related_transaction_id: related_id.map(ToOwned::to_owned),
        }
    }

    fn transfer_pair() -> Vec<Transaction> {
        vec![
            transaction("tx-1", TransactionKind::Expense, None),
            transaction("tx-2", TransactionKind::Income, None),
            transaction("tx-3", TransactionKind::Expense, Some("tx-4")),
            transaction("tx-4", TransactionKind::Income, Some("tx-3")),
        ]
    }

    #[test]
    fn compose_produces_mutually_linked_legs() {
        let wallets = default_wallets();
        let date = datetime!(2026-02-04 10:00 UTC);

        let (expense, income) = compose_transfer(1000.0, &wallets[0], &wallets[1], date, None);

        assert_eq!(expense.related_transaction_id, Some(income.id.clone()));
        assert_eq!(income.related_transaction_id, Some(expense.id.clone()));
        assert_eq!(expense.kind, TransactionKind::Expense);
        assert_eq!(income.kind, TransactionKind::Income);
        assert_eq!(expense.jar_id, TRANSFER_JAR_ID);
        assert_eq!(income.jar_id, TRANSFER_JAR_ID);
        assert_eq!(expense.amount, income.amount);
        assert_eq!(expense.date, income.date);
        assert_eq!(expense.wallet_id.as_deref(), Some("wallet-1"));
        assert_eq!(income.wallet_id.as_deref(), Some("wallet-2"));
    }

    #[test]
    fn compose_derives_ids_from_the_date() {
        let wallets = default_wallets();
        let date = datetime!(2026-02-04 10:00 UTC);

        let (expense, income) = compose_transfer(1000.0, &wallets[0], &wallets[1], date, None);

        let millis = date.unix_timestamp() * 1000;

        assert_eq!(expense.id, millis.to_string());
        assert_eq!(income.id, (millis + 1).to_string());
    }

    #[test]
    fn compose_names_the_opposite_wallet_in_generated_notes() {
        let wallets = default_wallets();
        let date = datetime!(2026-02-04 10:00 UTC);

        let (expense, income) = compose_transfer(1000.0, &wallets[0], &wallets[1], date, None);

        assert_eq!(expense.note.as_deref(), Some("Transfer to Bank Account"));
        assert_eq!(income.note.as_deref(), Some("Transfer from Cash"));
    }

    #[test]
    fn compose_keeps_a_user_note_on_both_legs() {
        let wallets = default_wallets();
        let date = datetime!(2026-02-04 10:00 UTC);

        let (expense, income) =
            compose_transfer(1000.0, &wallets[0], &wallets[1], date, Some("Rent money"));

        assert_eq!(expense.note.as_deref(), Some("Rent money"));
        assert_eq!(income.note.as_deref(), Some("Rent money"));
    }

    #[test]
    fn filter_drops_the_income_leg_of_a_transfer() {
        let visible = filter_visible_transactions(transfer_pair());

        let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();

        assert_eq!(ids, ["tx-1", "tx-2", "tx-3"]);
    }

    #[test]
    fn filter_keeps_normal_income_transactions() {
        let visible = filter_visible_transactions(transfer_pair());

        assert!(visible.iter().any(|t| t.id == "tx-2"));
    }

    #[test]
    fn filter_is_idempotent() {
        let once = filter_visible_transactions(transfer_pair());
        let twice = filter_visible_transactions(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn find_linked_resolves_the_opposite_leg() {
        let transactions = transfer_pair();

        let linked = find_linked_transaction(&transactions[2], &transactions).unwrap();

        assert_eq!(linked.id, "tx-4");
    }

    #[test]
    fn find_linked_is_none_without_a_related_id() {
        let transactions = transfer_pair();

        assert_eq!(find_linked_transaction(&transactions[0], &transactions), None);
    }

    #[test]
    fn find_linked_is_none_for_a_dangling_reference() {
        let orphan = transaction("tx-9", TransactionKind::Expense, Some("tx-gone"));
        let transactions = transfer_pair();

        assert_eq!(find_linked_transaction(&orphan, &transactions), None);
    }
}
