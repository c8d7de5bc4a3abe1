//! Greedy crafting of surplus books into higher tiers.
//!
//! Tiers are processed once, lowest first. At each tier the planner looks
//! ahead at every higher tier still in deficit, expresses that deficit in
//! units of the current tier (compounding [`CONVERSION_FACTOR`] per step) and
//! crafts as many books of the next tier as both the available multiple of
//! three and that lookahead allow.
//!
//! The amount available at a tier is the *absolute* value of its remaining
//! need. A tier that is itself in deficit is therefore treated as if it had
//! that many books to spare. Pinned by
//! `test_deficit_tier_is_treated_as_convertible`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::config::{CONVERSION_FACTOR, NUM_BOOK_TIERS};
use super::counts::{BookCounts, Tier};

/// Books crafted per source tier.
///
/// Entry `i` counts books of tier `i + 1` made from tier `i`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionPlan {
    crafted: [i64; NUM_BOOK_TIERS - 1],
}

impl ConversionPlan {
    /// Books crafted by converting `source`, or `None` for the top tier.
    pub fn crafted_from(&self, source: Tier) -> Option<i64> {
        self.crafted.get(source.index()).copied()
    }

    /// Books of `target` crafted from the tier below, or `None` for the
    /// lowest tier.
    pub fn crafted_into(&self, target: Tier) -> Option<i64> {
        target.previous().and_then(|source| self.crafted_from(source))
    }

    /// Total books crafted across all tiers.
    pub fn total_crafted(&self) -> i64 {
        self.crafted.iter().sum()
    }
}

/// Plan conversions for a signed remaining need.
///
/// Returns the adjusted need, clamped to zero, and the crafting plan.
pub fn plan(signed_need: BookCounts) -> (BookCounts, ConversionPlan) {
    let mut need = signed_need;
    let mut plan = ConversionPlan::default();

    for source in Tier::ALL {
        let Some(target) = source.next() else {
            break;
        };

        let excess = need[source].abs();
        if excess < CONVERSION_FACTOR {
            trace!(%source, excess, "not enough books to convert");
            continue;
        }

        let to_convert: i64 = source
            .higher()
            .filter(|&tier| need[tier] > 0)
            .map(|tier| {
                let steps = (tier.index() - source.index()) as u32;
                let units = need[tier] * CONVERSION_FACTOR.pow(steps);
                trace!(%source, %tier, units, "deficit expressed in source units");
                units
            })
            .sum();

        if to_convert <= 0 {
            trace!(%source, excess, "no higher tier needs books");
            continue;
        }

        let conversible = (excess - excess % CONVERSION_FACTOR).min(to_convert);
        let crafted = conversible / CONVERSION_FACTOR;
        plan.crafted[source.index()] = crafted;
        need[target] -= crafted;
        debug!(%source, %target, crafted, consumed = conversible, "planned conversion");
    }

    (need.clamp_non_negative(), plan)
}
