//! Run estimation.
//!
//! Domain drops are random, so this turns the remaining Philosophies deficit
//! into a rough number of runs using average yields per tier.

use tracing::debug;

use super::config::YieldConfig;
use crate::error::ValidationResult;

/// Estimates how many more domain runs cover a Philosophies deficit.
#[derive(Debug, Clone)]
pub struct RunEstimator {
    yields: YieldConfig,
    /// Philosophies-equivalent books per run
    per_run: f64,
}

impl Default for RunEstimator {
    fn default() -> Self {
        let yields = YieldConfig::default();
        Self {
            per_run: yields.philosophies_per_run(),
            yields,
        }
    }
}

impl RunEstimator {
    /// Create an estimator with custom yields.
    pub fn new(yields: YieldConfig) -> ValidationResult<Self> {
        yields.validate()?;
        Ok(Self {
            per_run: yields.philosophies_per_run(),
            yields,
        })
    }

    pub fn yields(&self) -> &YieldConfig {
        &self.yields
    }

    /// Philosophies-equivalent books gained per run.
    pub fn yield_per_run(&self) -> f64 {
        self.per_run
    }

    /// Estimate runs for the remaining Philosophies deficit, rounding up.
    pub fn estimate_runs(&self, remaining_philosophies: i64) -> u64 {
        if remaining_philosophies <= 0 {
            return 0;
        }

        let runs = (remaining_philosophies as f64 / self.per_run).ceil() as u64;
        debug!(remaining_philosophies, per_run = self.per_run, runs, "estimated runs");
        runs
    }
}
