//! Book economy constants and run-yield configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// Lowest level a Talent can have.
pub const TALENT_MIN_LEVEL: u8 = 1;

/// Highest level a Talent can reach.
pub const TALENT_MAX_LEVEL: u8 = 10;

/// Teachings, Guide, Philosophies.
pub const NUM_BOOK_TIERS: usize = 3;

/// Lower-tier books consumed to craft one book of the next tier.
pub const CONVERSION_FACTOR: i64 = 3;

/// Average books dropped per domain run, indexed by tier.
///
/// Community-sourced drop averages for a max world level domain.
pub const AVERAGE_BOOKS_PER_RUN: [f64; NUM_BOOK_TIERS] = [2.20, 1.97, 0.23];

/// Average drop yields used by the run estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldConfig {
    /// Average Teachings per run
    pub teachings: f64,
    /// Average Guide per run
    pub guide: f64,
    /// Average Philosophies per run
    pub philosophies: f64,
}

impl Default for YieldConfig {
    fn default() -> Self {
        let [teachings, guide, philosophies] = AVERAGE_BOOKS_PER_RUN;
        Self {
            teachings,
            guide,
            philosophies,
        }
    }
}

impl YieldConfig {
    /// Create a yield config with the default drop averages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the average Teachings per run.
    pub fn with_teachings(mut self, average: f64) -> Self {
        self.teachings = average;
        self
    }

    /// Set the average Guide per run.
    pub fn with_guide(mut self, average: f64) -> Self {
        self.guide = average;
        self
    }

    /// Set the average Philosophies per run.
    pub fn with_philosophies(mut self, average: f64) -> Self {
        self.philosophies = average;
        self
    }

    /// Philosophies-equivalent books per run.
    ///
    /// Nine Teachings or three Guides craft into one Philosophies.
    pub fn philosophies_per_run(&self) -> f64 {
        let factor = CONVERSION_FACTOR as f64;
        self.teachings / (factor * factor) + self.guide / factor + self.philosophies
    }

    /// Reject yields that would make the run estimate meaningless.
    pub fn validate(&self) -> ValidationResult<()> {
        let per_run = self.philosophies_per_run();
        if per_run.is_finite() && per_run > 0.0 {
            Ok(())
        } else {
            Err(ValidationError::InvalidYield(per_run))
        }
    }
}
