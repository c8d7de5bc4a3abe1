//! Level ranges and need aggregation.

use std::ops::Range;

use tracing::{debug, trace};

use super::config::{TALENT_MAX_LEVEL, TALENT_MIN_LEVEL};
use super::cost::cost_for_level_up;
use super::counts::BookCounts;
use crate::error::{ValidationError, ValidationResult};

/// A validated current-to-target level span for one Talent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRange {
    start: u8,
    end: u8,
}

impl LevelRange {
    /// Validate a single Talent's levels.
    pub fn new(start: i64, end: i64) -> ValidationResult<Self> {
        Self::for_talent(1, start, end)
    }

    /// Validate the levels of the `talent`-th Talent (one-based).
    ///
    /// Bounds are checked on the current level first, then the target,
    /// then their ordering.
    pub fn for_talent(talent: usize, start: i64, end: i64) -> ValidationResult<Self> {
        let start = talent_level(start)
            .ok_or(ValidationError::CurrentLevelOutOfBounds { talent, level: start })?;
        let end = talent_level(end)
            .ok_or(ValidationError::TargetLevelOutOfBounds { talent, level: end })?;
        if end < start {
            return Err(ValidationError::TargetBelowCurrent {
                talent,
                current: start,
                target: end,
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    /// True when the Talent is already at its target.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Levels that get raised, in increasing order.
    pub fn level_ups(&self) -> Range<u8> {
        self.start..self.end
    }
}

fn talent_level(level: i64) -> Option<u8> {
    u8::try_from(level)
        .ok()
        .filter(|level| (TALENT_MIN_LEVEL..=TALENT_MAX_LEVEL).contains(level))
}

/// Pair current and target levels into validated ranges.
pub fn level_ranges(current: &[i64], target: &[i64]) -> ValidationResult<Vec<LevelRange>> {
    if current.len() != target.len() {
        return Err(ValidationError::LevelCountMismatch {
            current: current.len(),
            target: target.len(),
        });
    }

    current
        .iter()
        .zip(target)
        .enumerate()
        .map(|(index, (&start, &end))| LevelRange::for_talent(index + 1, start, end))
        .collect()
}

/// Sum the level-up costs of every range.
pub fn aggregate(ranges: &[LevelRange]) -> ValidationResult<BookCounts> {
    let mut needed = BookCounts::ZERO;

    for range in ranges {
        for level in range.level_ups() {
            let cost = cost_for_level_up(level)?;
            trace!(level, ?cost, "adding level-up cost");
            needed += cost;
        }
    }

    debug!(talents = ranges.len(), ?needed, "aggregated book need");
    Ok(needed)
}
