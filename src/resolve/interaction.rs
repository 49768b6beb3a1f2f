//! Pairwise army interaction: merge and battle rules.
//!
//! Every function here is total over well-formed armies and never mutates its
//! inputs. When two candidates tie, the second argument wins; the route
//! scorer always passes the accumulated army first and the incoming army
//! second, so ties favour the newcomer.

use serde::{Deserialize, Serialize};

use super::config::ResolveConfig;
use crate::army::{Alignment, Army};

/// How two armies interact when they meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interaction {
    Merge,
    Battle,
}

impl Interaction {
    /// Classifies the meeting of `a` and `b`.
    pub fn between(a: &Army, b: &Army) -> Interaction {
        if a.is_allied_with(b) {
            Interaction::Merge
        } else {
            Interaction::Battle
        }
    }

    /// Operator used when printing a reduction step.
    pub const fn symbol(self) -> char {
        match self {
            Interaction::Merge => '+',
            Interaction::Battle => '-',
        }
    }
}

/// Combines two armies into one.
pub fn resolve(a: Army, b: Army, config: &ResolveConfig) -> Army {
    match Interaction::between(&a, &b) {
        Interaction::Merge => merge(a, b, config),
        Interaction::Battle => battle(a, b),
    }
}

/// Merges two allied armies.
///
/// Friendly armies of the same type gain the configured combine bonus and
/// keep their type. Otherwise the sizes are summed and the larger army's
/// type carries over; equal sizes keep `b`'s type.
pub fn merge(a: Army, b: Army, config: &ResolveConfig) -> Army {
    debug_assert_eq!(a.alignment, b.alignment);
    let total = a.size.saturating_add(b.size);

    if a.alignment == Alignment::Friendly && a.unit_type == b.unit_type {
        return a.with_size(total.saturating_add(config.combine_bonus()));
    }

    let carrier = if a.size > b.size { a } else { b };
    carrier.with_size(total)
}

/// Resolves a battle between two opposing armies.
///
/// Same-type or wildcard matchups are a straight size comparison: the larger
/// army survives with the difference (a tie leaves `b` with nothing).
/// Otherwise the side holding the type advantage fights at 1.5x efficiency.
pub fn battle(a: Army, b: Army) -> Army {
    if a.unit_type.is_even_match(b.unit_type) {
        return if a.size > b.size {
            a.with_size(a.size - b.size)
        } else {
            b.with_size(b.size - a.size)
        };
    }

    if a.unit_type.beats(b.unit_type) {
        fight(a, b)
    } else {
        fight(b, a)
    }
}

/// Attrition between an advantaged and a disadvantaged army.
///
/// Each round the advantaged side loses one unit and the disadvantaged side
/// loses one and a half, until either side is exhausted. The disadvantaged
/// size is floored afterwards. The strictly larger survivor wins; on a tie
/// (only possible when both reach zero) the disadvantaged army is returned.
pub fn fight(advantaged: Army, disadvantaged: Army) -> Army {
    // Work in half-units so the 1.5 decrement stays exact.
    let adv = u64::from(advantaged.size);
    let dis_halves = u64::from(disadvantaged.size) * 2;

    let rounds = adv.min(dis_halves.div_ceil(3));
    let adv_left = adv - rounds;
    let dis_left = dis_halves.saturating_sub(rounds * 3) / 2;

    // Both remainders are bounded by their original u32 sizes.
    if adv_left > dis_left {
        advantaged.with_size(adv_left as u32)
    } else {
        disadvantaged.with_size(dis_left as u32)
    }
}
