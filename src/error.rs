//! Validation errors for talent and book input.

use thiserror::Error;

use crate::books::config::{NUM_BOOK_TIERS, TALENT_MAX_LEVEL, TALENT_MIN_LEVEL};

/// Errors raised while validating levels, inventories and lookups.
///
/// Every variant is fatal: the calculator stops before producing a report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Current and target level lists have different lengths.
    #[error("number of current and target Talent levels do not match ({current} current, {target} target)")]
    LevelCountMismatch {
        /// Number of current levels supplied.
        current: usize,
        /// Number of target levels supplied.
        target: usize,
    },

    /// A current level lies outside the valid Talent range.
    #[error("current Talent level out of bounds: Talent #{talent} is {level}, expected {min}..={max}", min = TALENT_MIN_LEVEL, max = TALENT_MAX_LEVEL)]
    CurrentLevelOutOfBounds {
        /// One-based Talent position in the input list.
        talent: usize,
        /// The rejected level.
        level: i64,
    },

    /// A target level lies outside the valid Talent range.
    #[error("target Talent level out of bounds: Talent #{talent} is {level}, expected {min}..={max}", min = TALENT_MIN_LEVEL, max = TALENT_MAX_LEVEL)]
    TargetLevelOutOfBounds {
        /// One-based Talent position in the input list.
        talent: usize,
        /// The rejected level.
        level: i64,
    },

    /// A target level is lower than its current level.
    #[error("target Talent level is lower than current Talent level: Talent #{talent} goes from {current} to {target}")]
    TargetBelowCurrent {
        /// One-based Talent position in the input list.
        talent: usize,
        /// Current level.
        current: u8,
        /// Target level.
        target: u8,
    },

    /// The inventory did not list exactly one count per book tier.
    #[error("unexpected number of Talent book tiers: got {found}, expected {expected}", expected = NUM_BOOK_TIERS)]
    InventoryTierCount {
        /// Number of counts supplied.
        found: usize,
    },

    /// An owned book count was negative.
    #[error("owned {tier} books cannot be negative, got {count}")]
    NegativeInventory {
        /// Display name of the tier.
        tier: &'static str,
        /// The rejected count.
        count: i64,
    },

    /// A comma-separated token was not an integer.
    #[error("invalid integer '{value}'")]
    InvalidNumber {
        /// The raw token.
        value: String,
    },

    /// No cost-table entry exists for the requested level-up.
    #[error("no level-up cost for level {level}, expected {min}..{max}", min = TALENT_MIN_LEVEL, max = TALENT_MAX_LEVEL)]
    LevelUpOutOfRange {
        /// The level being raised.
        level: u8,
    },

    /// The configured run yield cannot be divided by.
    #[error("average books per run must be positive and finite, got {0}")]
    InvalidYield(f64),
}

/// Result type for validation-bearing operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
