//! The command line front-end for the jarwise budgeting core.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use time::OffsetDateTime;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use jarwise::{
    Error,
    filters::format_amount,
    models::{
        CurrencyCode, SubTransaction, Transaction, TransactionKind, TransactionStatus, Wallet,
        default_jars, default_wallets, jar_details,
    },
    storage::SqliteStore,
    stores::{SettingsStore, SubTransactionStore, TransactionStore},
    transfer::{
        TRANSFER_JAR_ID, compose_transfer, filter_visible_transactions, find_linked_transaction,
    },
    validation::{TransactionInput, TransferInput, validate_transaction, validate_transfer},
};

/// Jar-based envelope budgeting from the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application database.
    #[arg(long, default_value = "jarwise.db")]
    db_path: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record an income or expense transaction.
    Add {
        /// The amount of money, e.g. "500.50".
        #[arg(long)]
        amount: String,

        /// The id of the jar the money belongs to.
        #[arg(long)]
        jar: Option<String>,

        /// The id of the wallet the money moved through.
        #[arg(long)]
        wallet: Option<String>,

        /// A free-form note.
        #[arg(long)]
        note: Option<String>,

        /// Record the transaction as income instead of an expense.
        #[arg(long)]
        income: bool,

        /// Save as a draft pending review.
        #[arg(long)]
        draft: bool,
    },

    /// Move money between two wallets.
    Transfer {
        /// The amount of money to move.
        #[arg(long)]
        amount: String,

        /// The id of the source wallet.
        #[arg(long)]
        from: Option<String>,

        /// The id of the destination wallet.
        #[arg(long)]
        to: Option<String>,

        /// A free-form note stored on both legs.
        #[arg(long)]
        note: Option<String>,
    },

    /// List transactions, newest first.
    History {
        /// Include the hidden income legs of transfers.
        #[arg(long)]
        all: bool,
    },

    /// Show one transaction with its linked leg and receipt items.
    Show {
        /// The id of the transaction.
        id: String,
    },

    /// Manage the receipt line items of a transaction.
    #[command(subcommand)]
    Item(ItemCommand),

    /// Delete every stored transaction.
    Clear,

    /// Show or set the display currency.
    Currency {
        /// A currency code (THB, USD, EUR, JPY, GBP). Omit to show the
        /// current preference.
        code: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ItemCommand {
    /// Attach a line item to a transaction.
    Add {
        /// The id of the parent transaction.
        #[arg(long)]
        parent: String,

        /// What the line item was for.
        #[arg(long)]
        description: String,

        /// The price of the line item.
        #[arg(long)]
        amount: f64,

        /// An optional category label.
        #[arg(long)]
        category: Option<String>,
    },

    /// List the line items of a transaction.
    List {
        /// The id of the parent transaction.
        parent: String,
    },

    /// Delete a line item by id.
    Delete {
        /// The id of the line item.
        id: String,
    },
}

fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_filter(filter::LevelFilter::WARN),
        )
        .init();
}

fn run(args: Args) -> Result<ExitCode, Error> {
    let storage = SqliteStore::open(&args.db_path)?;
    let mut transactions = TransactionStore::new(storage.clone());
    let mut sub_transactions = SubTransactionStore::new(storage.clone());
    let mut settings = SettingsStore::new(storage);

    match args.command {
        Command::Add {
            amount,
            jar,
            wallet,
            note,
            income,
            draft,
        } => {
            let input = TransactionInput {
                amount,
                jar_id: jar,
                wallet_id: wallet,
                note: note.unwrap_or_default(),
            };

            let result = validate_transaction(&input);
            if !result.is_valid() {
                if let Some(error) = result.amount {
                    eprintln!("amount: {error}");
                }
                if let Some(error) = result.jar {
                    eprintln!("jar: {error}");
                }
                return Ok(ExitCode::FAILURE);
            }

            // Validation guarantees the amount parses and a jar was given.
            let Ok(amount) = input.amount.trim().parse::<f64>() else {
                return Ok(ExitCode::FAILURE);
            };
            let jar_id = input.jar_id.unwrap_or_default();

            let date = OffsetDateTime::now_utc();
            let transaction = Transaction {
                id: Transaction::id_for(date),
                amount,
                jar_id: jar_id.clone(),
                wallet_id: input.wallet_id,
                note: (!input.note.trim().is_empty()).then_some(input.note),
                date,
                kind: if income {
                    TransactionKind::Income
                } else {
                    TransactionKind::Expense
                },
                status: draft.then_some(TransactionStatus::Draft),
                related_transaction_id: None,
            };

            let id = transaction.id.clone();
            transactions.save(transaction)?;

            let currency = settings.currency()?;
            println!(
                "Saved {} of {} to jar '{}' ({})",
                if income { "income" } else { "expense" },
                format_amount(amount, currency),
                jar_id,
                id,
            );
        }

        Command::Transfer {
            amount,
            from,
            to,
            note,
        } => {
            let input = TransferInput {
                amount,
                from_wallet_id: from,
                to_wallet_id: to,
            };

            let result = validate_transfer(&input);
            if !result.is_valid() {
                if let Some(error) = result.amount {
                    eprintln!("amount: {error}");
                }
                if let Some(error) = result.from_wallet {
                    eprintln!("from: {error}");
                }
                if let Some(error) = result.to_wallet {
                    eprintln!("to: {error}");
                }
                return Ok(ExitCode::FAILURE);
            }

            // Validation guarantees the amount parses and both wallets were given.
            let Ok(amount) = input.amount.trim().parse::<f64>() else {
                return Ok(ExitCode::FAILURE);
            };
            let from_id = input.from_wallet_id.unwrap_or_default();
            let to_id = input.to_wallet_id.unwrap_or_default();

            let wallets = default_wallets();
            let Some(from_wallet) = wallets.iter().find(|wallet| wallet.id == from_id) else {
                eprintln!("unknown wallet '{from_id}', expected one of: {}", wallet_ids(&wallets));
                return Ok(ExitCode::FAILURE);
            };
            let Some(to_wallet) = wallets.iter().find(|wallet| wallet.id == to_id) else {
                eprintln!("unknown wallet '{to_id}', expected one of: {}", wallet_ids(&wallets));
                return Ok(ExitCode::FAILURE);
            };

            let (expense, income) = compose_transfer(
                amount,
                from_wallet,
                to_wallet,
                OffsetDateTime::now_utc(),
                note.as_deref(),
            );

            transactions.save_transfer(expense, income)?;

            let currency = settings.currency()?;
            println!(
                "Transferred {} from {} to {}",
                format_amount(amount, currency),
                from_wallet.name,
                to_wallet.name,
            );
        }

        Command::History { all } => {
            let list = transactions.transactions()?;
            let list = if all {
                list
            } else {
                filter_visible_transactions(list)
            };

            if list.is_empty() {
                println!("No transactions.");
                return Ok(ExitCode::SUCCESS);
            }

            let currency = settings.currency()?;
            let jars = default_jars();

            for transaction in &list {
                let sign = match transaction.kind {
                    TransactionKind::Income => "+",
                    TransactionKind::Expense => "-",
                };
                let jar_name = if transaction.jar_id == TRANSFER_JAR_ID {
                    "Transfer"
                } else {
                    jar_details(&jars, &transaction.jar_id)
                        .map_or(transaction.jar_id.as_str(), |jar| jar.name.as_str())
                };
                let draft = match transaction.status {
                    Some(TransactionStatus::Draft) => " [draft]",
                    _ => "",
                };

                println!(
                    "{:<14} {}  {:>1}{:<12} {:<12} {}{}",
                    transaction.id,
                    transaction.date.date(),
                    sign,
                    format_amount(transaction.amount, currency),
                    jar_name,
                    transaction.note.as_deref().unwrap_or(""),
                    draft,
                );
            }
        }

        Command::Show { id } => {
            let all = transactions.transactions()?;
            let Some(transaction) = all.iter().find(|transaction| transaction.id == id) else {
                eprintln!("no transaction with id '{id}'");
                return Ok(ExitCode::FAILURE);
            };

            let currency = settings.currency()?;
            let kind = match transaction.kind {
                TransactionKind::Income => "income",
                TransactionKind::Expense => "expense",
            };

            println!("Transaction {}", transaction.id);
            println!("  date:   {}", transaction.date.date());
            println!("  kind:   {kind}");
            println!("  amount: {}", format_amount(transaction.amount, currency));
            println!("  jar:    {}", transaction.jar_id);
            if let Some(wallet_id) = &transaction.wallet_id {
                println!("  wallet: {wallet_id}");
            }
            if let Some(note) = &transaction.note {
                println!("  note:   {note}");
            }
            if let Some(TransactionStatus::Draft) = transaction.status {
                println!("  status: draft");
            }

            if let Some(linked) = find_linked_transaction(transaction, &all) {
                println!(
                    "  linked: {} ({} leg in wallet {})",
                    linked.id,
                    match linked.kind {
                        TransactionKind::Income => "income",
                        TransactionKind::Expense => "expense",
                    },
                    linked.wallet_id.as_deref().unwrap_or("?"),
                );
            }

            let items = sub_transactions.sub_transactions_by_parent(&id)?;
            if !items.is_empty() {
                println!("  items:");
                for item in items {
                    println!(
                        "    {:<14} {:<20} {}",
                        item.id,
                        item.description,
                        format_amount(item.amount, currency),
                    );
                }
            }
        }

        Command::Item(command) => match command {
            ItemCommand::Add {
                parent,
                description,
                amount,
                category,
            } => {
                let item = SubTransaction {
                    id: Transaction::id_for(OffsetDateTime::now_utc()),
                    parent_id: parent,
                    description,
                    amount,
                    category,
                };

                let id = item.id.clone();
                sub_transactions.save(item)?;

                println!("Added item {id}");
            }

            ItemCommand::List { parent } => {
                let items = sub_transactions.sub_transactions_by_parent(&parent)?;

                if items.is_empty() {
                    println!("No items for transaction '{parent}'.");
                    return Ok(ExitCode::SUCCESS);
                }

                let currency = settings.currency()?;
                for item in items {
                    println!(
                        "{:<14} {:<20} {:<12} {}",
                        item.id,
                        item.description,
                        format_amount(item.amount, currency),
                        item.category.as_deref().unwrap_or(""),
                    );
                }
            }

            ItemCommand::Delete { id } => {
                sub_transactions.delete(&id)?;

                println!("Deleted item {id}");
            }
        },

        Command::Clear => {
            transactions.clear()?;

            println!("All transactions cleared.");
        }

        Command::Currency { code } => match code {
            Some(code) => match CurrencyCode::from_code(&code.to_ascii_uppercase()) {
                Some(currency) => {
                    settings.set_currency(currency)?;

                    println!("Display currency set to {currency}");
                }
                None => {
                    eprintln!("unknown currency '{code}', expected one of: {}", currency_codes());
                    return Ok(ExitCode::FAILURE);
                }
            },
            None => println!("{}", settings.currency()?),
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn wallet_ids(wallets: &[Wallet]) -> String {
    wallets
        .iter()
        .map(|wallet| wallet.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn currency_codes() -> String {
    CurrencyCode::ALL
        .iter()
        .map(|currency| currency.code())
        .collect::<Vec<_>>()
        .join(", ")
}
