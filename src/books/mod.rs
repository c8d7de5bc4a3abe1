//! Talent book requirements.
//!
//! # Overview
//!
//! A calculation runs these stages in order, each taking the previous
//! stage's counts by value:
//! - **aggregate**: sums the fixed [`cost_for_level_up`] table over every
//!   requested level-up
//! - **reconcile**: subtracts an owned [`Inventory`], leaving a signed need
//! - **conversion**: greedily crafts surplus lower-tier books into higher
//!   tiers (only with an inventory and conversion enabled)
//! - **estimator**: turns the remaining Philosophies into a run estimate
//!
//! # Example
//!
//! ```
//! use gitbcalc::books::{calculate, level_ranges, BookCounts, PlanRequest, RunEstimator};
//!
//! let ranges = level_ranges(&[1, 1], &[10, 10]).unwrap();
//! let report = calculate(&PlanRequest::new(ranges), &RunEstimator::default()).unwrap();
//!
//! assert_eq!(report.needed, BookCounts::new(6, 42, 76));
//! ```

mod aggregate;
pub mod config;
mod conversion;
mod cost;
mod counts;
mod estimator;
mod parser;
mod pipeline;
mod reconcile;

pub use aggregate::{aggregate, level_ranges, LevelRange};
pub use config::YieldConfig;
pub use conversion::{plan, ConversionPlan};
pub use cost::cost_for_level_up;
pub use counts::{BookCounts, Tier};
pub use estimator::RunEstimator;
pub use parser::{parse_integer_list, LevelList};
pub use pipeline::{calculate, PlanRequest};
pub use reconcile::{reconcile, Inventory};
