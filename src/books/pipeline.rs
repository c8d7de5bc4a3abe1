//! End-to-end book calculation.

use tracing::{debug, warn};

use super::aggregate::{aggregate, LevelRange};
use super::conversion::plan;
use super::estimator::RunEstimator;
use super::reconcile::{reconcile, Inventory};
use crate::error::ValidationResult;
use crate::report::BookReport;

/// Everything needed for one calculation.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Validated level spans, one per Talent
    pub ranges: Vec<LevelRange>,
    /// Books already owned
    pub inventory: Option<Inventory>,
    /// Whether surplus books may be crafted upwards
    pub allow_conversion: bool,
}

impl PlanRequest {
    pub fn new(ranges: Vec<LevelRange>) -> Self {
        Self {
            ranges,
            ..Self::default()
        }
    }

    /// Set the owned inventory.
    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = Some(inventory);
        self
    }

    /// Enable or disable conversion.
    pub fn with_conversion(mut self, allow: bool) -> Self {
        self.allow_conversion = allow;
        self
    }
}

/// Run aggregation, reconciliation, conversion and run estimation.
///
/// Conversion and clamping only apply when an inventory is present.
pub fn calculate(request: &PlanRequest, estimator: &RunEstimator) -> ValidationResult<BookReport> {
    let raw_need = aggregate(&request.ranges)?;

    let (needed, crafted) = match request.inventory.as_ref() {
        Some(inventory) => {
            let signed = reconcile(raw_need, Some(inventory));
            if request.allow_conversion {
                let (adjusted, conversions) = plan(signed);
                (adjusted, Some(conversions))
            } else {
                (signed.clamp_non_negative(), None)
            }
        }
        None => {
            if request.allow_conversion {
                warn!("conversion requested without owned books; nothing to convert");
            }
            (raw_need, None)
        }
    };

    let estimated_runs = estimator.estimate_runs(needed.philosophies);
    debug!(?needed, ?crafted, estimated_runs, "calculation complete");

    Ok(BookReport {
        needed,
        crafted,
        estimated_runs,
        allow_conversion: request.allow_conversion,
    })
}
