//! Army interaction resolution.
//!
//! Combines two armies into one: allied armies merge, opposing armies
//! battle. Battles between different troop types follow the
//! Bow > Axe > Sword > Bow advantage cycle.

pub mod config;
pub mod interaction;

pub use config::{ResolveConfig, COMBINE_BONUS, MAX_STRENGTH_LEVEL};
pub use interaction::{battle, fight, merge, resolve, Interaction};
