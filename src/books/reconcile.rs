//! Owned-book inventory and need reconciliation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::counts::BookCounts;
use crate::error::{ValidationError, ValidationResult};

/// Books already owned, one non-negative count per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory(BookCounts);

impl Inventory {
    /// Create an inventory, rejecting negative counts.
    pub fn new(counts: BookCounts) -> ValidationResult<Self> {
        if let Some((tier, count)) = counts.iter().find(|&(_, count)| count < 0) {
            return Err(ValidationError::NegativeInventory {
                tier: tier.name(),
                count,
            });
        }
        Ok(Self(counts))
    }

    pub fn counts(&self) -> BookCounts {
        self.0
    }
}

/// Subtract owned books from the need.
///
/// The result is signed: a negative tier is a surplus. Without an
/// inventory the need passes through untouched.
pub fn reconcile(need: BookCounts, inventory: Option<&Inventory>) -> BookCounts {
    let Some(inventory) = inventory else {
        return need;
    };

    let remaining = need - inventory.counts();
    debug!(owned = ?inventory.counts(), ?remaining, "reconciled owned books");
    remaining
}
