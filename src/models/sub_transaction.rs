//! Defines the `SubTransaction` type, the line items of an itemized receipt.

use serde::{Deserialize, Serialize};

/// A single line item belonging to a parent [Transaction](super::Transaction),
/// e.g. one article on an imported receipt.
///
/// Sub-transactions are created and deleted independently of their parent;
/// deleting a parent transaction does not remove its line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTransaction {
    /// Caller-supplied identifier.
    pub id: String,

    /// The id of the parent transaction this item belongs to.
    pub parent_id: String,

    /// What the line item was for.
    pub description: String,

    /// The price of this line item.
    pub amount: f64,

    /// Optional free-form category label for the line item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
