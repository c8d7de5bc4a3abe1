//! Talent book calculator.
//!
//! Works out how many Teachings, Guide and Philosophies books a set of
//! Talents needs to reach their target levels, after subtracting owned books
//! and optionally crafting surplus books into higher tiers.

pub mod books;
pub mod cli;
pub mod error;
pub mod report;

pub use books::{calculate, BookCounts, ConversionPlan, Inventory, PlanRequest, RunEstimator, Tier};
pub use error::{ValidationError, ValidationResult};
pub use report::BookReport;
