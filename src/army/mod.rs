//! Army representation.
//!
//! Contains the structured army value (alignment, unit type, size) and the
//! token parser that builds it from raw host input such as `friendly_axe4`.

pub mod token;
pub mod unit;

pub use token::{parse_armies, parse_army, ParseError};
pub use unit::{Alignment, Army, UnitType, ALL_UNIT_TYPES};
