//! Book tiers and per-tier counts.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Sub};

use serde::{Deserialize, Serialize};

use super::config::NUM_BOOK_TIERS;

/// Talent book tier, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// "Teachings of ..." (two-star)
    Teachings,
    /// "Guide to ..." (three-star)
    Guide,
    /// "Philosophies of ..." (four-star)
    Philosophies,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; NUM_BOOK_TIERS] = [Tier::Teachings, Tier::Guide, Tier::Philosophies];

    /// Zero-based position of this tier.
    pub const fn index(self) -> usize {
        match self {
            Tier::Teachings => 0,
            Tier::Guide => 1,
            Tier::Philosophies => 2,
        }
    }

    /// One-based tier number, as shown in reports.
    pub const fn number(self) -> usize {
        self.index() + 1
    }

    pub fn from_index(index: usize) -> Option<Tier> {
        Tier::ALL.get(index).copied()
    }

    /// Display name of the tier.
    pub const fn name(self) -> &'static str {
        match self {
            Tier::Teachings => "Teachings",
            Tier::Guide => "Guide",
            Tier::Philosophies => "Philosophies",
        }
    }

    /// The tier this one crafts into, if any.
    pub fn next(self) -> Option<Tier> {
        Tier::from_index(self.index() + 1)
    }

    /// The tier this one is crafted from, if any.
    pub fn previous(self) -> Option<Tier> {
        self.index().checked_sub(1).and_then(Tier::from_index)
    }

    /// Every tier strictly above this one, lowest first.
    pub fn higher(self) -> impl Iterator<Item = Tier> {
        Tier::ALL.into_iter().skip(self.index() + 1)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A signed book count per tier.
///
/// Negative values only appear transiently, after owned books have been
/// subtracted, and mean a surplus of that tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookCounts {
    pub teachings: i64,
    pub guide: i64,
    pub philosophies: i64,
}

impl BookCounts {
    /// No books of any tier.
    pub const ZERO: BookCounts = BookCounts::new(0, 0, 0);

    /// Create counts from lowest to highest tier.
    pub const fn new(teachings: i64, guide: i64, philosophies: i64) -> Self {
        Self {
            teachings,
            guide,
            philosophies,
        }
    }

    /// Build counts from a slice holding exactly one value per tier.
    pub fn from_slice(values: &[i64]) -> Option<Self> {
        match *values {
            [teachings, guide, philosophies] => Some(Self::new(teachings, guide, philosophies)),
            _ => None,
        }
    }

    /// Iterate `(tier, count)` pairs, lowest tier first.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, i64)> + '_ {
        Tier::ALL.into_iter().map(move |tier| (tier, self[tier]))
    }

    /// Replace every surplus with zero.
    pub fn clamp_non_negative(self) -> Self {
        Self::new(
            self.teachings.max(0),
            self.guide.max(0),
            self.philosophies.max(0),
        )
    }

    /// True when no tier carries a deficit.
    pub fn is_satisfied(&self) -> bool {
        self.iter().all(|(_, count)| count <= 0)
    }
}

impl Index<Tier> for BookCounts {
    type Output = i64;

    fn index(&self, tier: Tier) -> &i64 {
        match tier {
            Tier::Teachings => &self.teachings,
            Tier::Guide => &self.guide,
            Tier::Philosophies => &self.philosophies,
        }
    }
}

impl IndexMut<Tier> for BookCounts {
    fn index_mut(&mut self, tier: Tier) -> &mut i64 {
        match tier {
            Tier::Teachings => &mut self.teachings,
            Tier::Guide => &mut self.guide,
            Tier::Philosophies => &mut self.philosophies,
        }
    }
}

impl Add for BookCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.teachings + other.teachings,
            self.guide + other.guide,
            self.philosophies + other.philosophies,
        )
    }
}

impl AddAssign for BookCounts {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for BookCounts {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.teachings - other.teachings,
            self.guide - other.guide,
            self.philosophies - other.philosophies,
        )
    }
}
