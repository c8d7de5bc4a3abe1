//! Parsing of comma-separated command-line values.
//!
//! Levels are parsed as plain integers here; range checks belong to
//! [`LevelRange`](super::LevelRange) so that the error can name the bound.

use std::str::FromStr;

use super::counts::BookCounts;
use super::reconcile::Inventory;
use crate::error::{ValidationError, ValidationResult};

/// Parse a comma-separated list of integers, e.g. `"1,6, 9"`.
pub fn parse_integer_list(raw: &str) -> ValidationResult<Vec<i64>> {
    raw.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| ValidationError::InvalidNumber {
                value: token.to_string(),
            })
        })
        .collect()
}

/// Talent levels as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelList(Vec<i64>);

impl LevelList {
    pub fn levels(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for LevelList {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_integer_list(raw).map(Self)
    }
}

impl FromStr for Inventory {
    type Err = ValidationError;

    /// Parse `"teachings,guide,philosophies"`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let values = parse_integer_list(raw)?;
        let counts = BookCounts::from_slice(&values).ok_or(ValidationError::InventoryTierCount {
            found: values.len(),
        })?;
        Inventory::new(counts)
    }
}
