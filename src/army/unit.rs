//! Alignments, unit types, and the army value itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side an army fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Friendly,
    Enemy,
}

impl Alignment {
    /// Returns the token prefix used in raw army tokens.
    pub const fn name(self) -> &'static str {
        match self {
            Alignment::Friendly => "friendly",
            Alignment::Enemy => "enemy",
        }
    }

    /// Returns the sign applied to a final army size when scoring.
    pub const fn sign(self) -> i64 {
        match self {
            Alignment::Friendly => 1,
            Alignment::Enemy => -1,
        }
    }
}

/// The kind of troops in an army.
///
/// `Any` is a wildcard: it never has or suffers a type advantage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Bow,
    Axe,
    Sword,
    Any,
}

/// All unit types in token-matching order.
pub const ALL_UNIT_TYPES: [UnitType; 4] =
    [UnitType::Bow, UnitType::Axe, UnitType::Sword, UnitType::Any];

impl UnitType {
    /// Returns the lowercase name used in raw army tokens.
    pub const fn name(self) -> &'static str {
        match self {
            UnitType::Bow => "bow",
            UnitType::Axe => "axe",
            UnitType::Sword => "sword",
            UnitType::Any => "any",
        }
    }

    /// Returns true if `self` has the advantage over `other` in the
    /// Bow > Axe > Sword > Bow cycle. Always false when either side is `Any`.
    pub const fn beats(self, other: UnitType) -> bool {
        matches!(
            (self, other),
            (UnitType::Bow, UnitType::Axe)
                | (UnitType::Axe, UnitType::Sword)
                | (UnitType::Sword, UnitType::Bow)
        )
    }

    /// Returns true if a battle between these types is a straight size
    /// comparison (same type, or either side is the wildcard).
    pub fn is_even_match(self, other: UnitType) -> bool {
        self == other || self == UnitType::Any || other == UnitType::Any
    }
}

/// A single army token: who it fights for, what it fields, and how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Army {
    pub alignment: Alignment,
    pub unit_type: UnitType,
    pub size: u32,
}

impl Army {
    pub const fn new(alignment: Alignment, unit_type: UnitType, size: u32) -> Self {
        Army {
            alignment,
            unit_type,
            size,
        }
    }

    pub const fn friendly(unit_type: UnitType, size: u32) -> Self {
        Army::new(Alignment::Friendly, unit_type, size)
    }

    pub const fn enemy(unit_type: UnitType, size: u32) -> Self {
        Army::new(Alignment::Enemy, unit_type, size)
    }

    /// Returns a copy of this army's identity with a different size.
    pub const fn with_size(self, size: u32) -> Self {
        Army::new(self.alignment, self.unit_type, size)
    }

    /// Returns true if both armies fight for the same side.
    pub fn is_allied_with(&self, other: &Army) -> bool {
        self.alignment == other.alignment
    }

    /// A zero-size army has been wiped out but still carries its identity.
    pub const fn is_eliminated(&self) -> bool {
        self.size == 0
    }

    /// Signed size: positive for friendly armies, negative for enemies.
    pub const fn signed_size(&self) -> i64 {
        self.alignment.sign() * self.size as i64
    }
}

impl fmt::Display for Army {
    /// Formats the army as its canonical token, e.g. `friendly_axe4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}{}",
            self.alignment.name(),
            self.unit_type.name(),
            self.size
        )
    }
}
