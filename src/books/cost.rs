//! Fixed level-up cost table.

use super::config::{TALENT_MAX_LEVEL, TALENT_MIN_LEVEL};
use super::counts::BookCounts;
use crate::error::{ValidationError, ValidationResult};

/// Books consumed by each level-up, indexed by `level - TALENT_MIN_LEVEL`.
///
/// Levels below 6 only take Teachings and Guide; from 6 up only Philosophies.
const LEVEL_UP_COSTS: [BookCounts; (TALENT_MAX_LEVEL - TALENT_MIN_LEVEL) as usize] = [
    BookCounts::new(3, 0, 0),  // 1 -> 2
    BookCounts::new(0, 2, 0),  // 2 -> 3
    BookCounts::new(0, 4, 0),  // 3 -> 4
    BookCounts::new(0, 6, 0),  // 4 -> 5
    BookCounts::new(0, 9, 0),  // 5 -> 6
    BookCounts::new(0, 0, 4),  // 6 -> 7
    BookCounts::new(0, 0, 6),  // 7 -> 8
    BookCounts::new(0, 0, 12), // 8 -> 9
    BookCounts::new(0, 0, 16), // 9 -> 10
];

/// Books needed to raise a Talent from `level` to `level + 1`.
pub fn cost_for_level_up(level: u8) -> ValidationResult<BookCounts> {
    level
        .checked_sub(TALENT_MIN_LEVEL)
        .and_then(|offset| LEVEL_UP_COSTS.get(offset as usize))
        .copied()
        .ok_or(ValidationError::LevelUpOutOfRange { level })
}
