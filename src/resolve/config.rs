//! Resolver configuration.

use serde::{Deserialize, Serialize};

/// Bonus troops gained when two friendly armies of the same type merge,
/// indexed by strength level.
pub const COMBINE_BONUS: [u32; 4] = [0, 7, 11, 15];

/// Highest strength level with a non-zero entry in [`COMBINE_BONUS`].
pub const MAX_STRENGTH_LEVEL: u8 = (COMBINE_BONUS.len() - 1) as u8;

/// Caller-supplied settings threaded through every resolve call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolveConfig {
    pub strength_level: u8,
}

impl ResolveConfig {
    pub const fn new(strength_level: u8) -> Self {
        ResolveConfig { strength_level }
    }

    /// Returns the same-type friendly merge bonus. Unknown levels get 0.
    pub fn combine_bonus(&self) -> u32 {
        COMBINE_BONUS
            .get(self.strength_level as usize)
            .copied()
            .unwrap_or(0)
    }
}
