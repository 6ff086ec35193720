//! Defines the jar and wallet allocation entities and their fixed icon and
//! color palettes.

use serde::{Deserialize, Serialize};

/// A budgeting category that money is allocated into.
///
/// Jars form a tree: `level` 0 entries are roots and children reference their
/// parent by id. The built-in set from [default_jars] is flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jar {
    /// Stable identifier, referenced by [Transaction](super::Transaction)
    /// records.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The id of the parent jar, or `None` for a root.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Depth in the jar tree. Roots are level 0.
    pub level: u8,
    /// The share of incoming money allocated to this jar, in percent.
    pub percentage: f64,
    /// Display icon, one of the fixed palette.
    pub icon: AllocationIcon,
    /// Display color, one of the fixed palette.
    pub color: AllocationColor,
}

/// A named money-holding account, e.g. cash or a bank account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Stable identifier, referenced by [Transaction](super::Transaction)
    /// records.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The id of the parent wallet, or `None` for a root.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Depth in the wallet tree. Roots are level 0.
    pub level: u8,
    /// The current balance of the wallet.
    pub balance: f64,
    /// Display icon, one of the fixed palette.
    pub icon: AllocationIcon,
    /// Display color, one of the fixed palette.
    pub color: AllocationColor,
}

/// The fixed set of icons a jar or wallet can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationIcon {
    /// A house, used for necessities.
    Home,
    /// A stack of books, used for education.
    Book,
    /// A piggy bank, used for savings.
    PiggyBank,
    /// A game controller, used for play money.
    Gamepad,
    /// A rising chart, used for investments.
    Chart,
    /// A wrapped present, used for giving.
    Gift,
    /// Banknotes, used for the cash wallet.
    Cash,
    /// A bank building, used for account wallets.
    Bank,
    /// A payment card, used for card wallets.
    CreditCard,
}

/// The fixed set of accent colors a jar or wallet can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationColor {
    /// Blue accent.
    Blue,
    /// Green accent.
    Green,
    /// Yellow accent.
    Yellow,
    /// Pink accent.
    Pink,
    /// Purple accent.
    Purple,
    /// Red accent.
    Red,
}

/// The built-in six-jar allocation set.
///
/// Ids and display attributes match the original application; the
/// percentages follow the classic six-jars split and sum to 100.
pub fn default_jars() -> Vec<Jar> {
    let jars = [
        (
            "necessities",
            "Necessities",
            55.0,
            AllocationIcon::Home,
            AllocationColor::Blue,
        ),
        (
            "education",
            "Education",
            10.0,
            AllocationIcon::Book,
            AllocationColor::Green,
        ),
        (
            "savings",
            "Savings",
            10.0,
            AllocationIcon::PiggyBank,
            AllocationColor::Yellow,
        ),
        (
            "play",
            "Play",
            10.0,
            AllocationIcon::Gamepad,
            AllocationColor::Pink,
        ),
        (
            "investment",
            "Investment",
            10.0,
            AllocationIcon::Chart,
            AllocationColor::Purple,
        ),
        (
            "give",
            "Give",
            5.0,
            AllocationIcon::Gift,
            AllocationColor::Red,
        ),
    ];

    jars.into_iter()
        .map(|(id, name, percentage, icon, color)| Jar {
            id: id.to_owned(),
            name: name.to_owned(),
            parent_id: None,
            level: 0,
            percentage,
            icon,
            color,
        })
        .collect()
}

/// The built-in wallet set: cash, a bank account, and a credit card.
pub fn default_wallets() -> Vec<Wallet> {
    let wallets = [
        (
            "wallet-1",
            "Cash",
            AllocationIcon::Cash,
            AllocationColor::Green,
        ),
        (
            "wallet-2",
            "Bank Account",
            AllocationIcon::Bank,
            AllocationColor::Blue,
        ),
        (
            "wallet-3",
            "Credit Card",
            AllocationIcon::CreditCard,
            AllocationColor::Purple,
        ),
    ];

    wallets
        .into_iter()
        .map(|(id, name, icon, color)| Wallet {
            id: id.to_owned(),
            name: name.to_owned(),
            parent_id: None,
            level: 0,
            balance: 0.0,
            icon,
            color,
        })
        .collect()
}

/// Look up a jar by id, falling back to the first jar in the list when the
/// id is unknown. Returns `None` only when `jars` is empty.
pub fn jar_details<'a>(jars: &'a [Jar], id: &str) -> Option<&'a Jar> {
    jars.iter().find(|jar| jar.id == id).or_else(|| jars.first())
}
