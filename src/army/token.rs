//! Army token parsing.
//!
//! A token packs alignment, unit type and size into one word:
//! `<alignment>[_]<type><size>`, e.g. `friendly_axe4` or `enemyany21`.
//! Matching is case-insensitive. Lists of tokens may be separated by commas,
//! whitespace, or both.

use std::str::FromStr;

use thiserror::Error;

use super::unit::{Alignment, Army, ALL_UNIT_TYPES};

/// Errors that can occur while parsing an army token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty army token")]
    Empty,

    #[error("army token '{0}' has no size")]
    MissingSize(String),

    #[error("army size in '{0}' is out of range")]
    InvalidSize(String),

    #[error("unexpected input after size in '{0}'")]
    TrailingInput(String),

    #[error("army token '{0}' has no alignment (expected 'friendly' or 'enemy')")]
    UnknownAlignment(String),

    #[error("army token '{0}' has no unit type (expected bow, axe, sword or any)")]
    UnknownUnitType(String),
}

/// Parses a single army token such as `friendly_axe4`.
pub fn parse_army(token: &str) -> Result<Army, ParseError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let lower = trimmed.to_ascii_lowercase();

    let digits_start = lower
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| ParseError::MissingSize(trimmed.to_string()))?;
    let (name, rest) = lower.split_at(digits_start);
    let digits_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, trailing) = rest.split_at(digits_len);
    if !trailing.is_empty() {
        return Err(ParseError::TrailingInput(trimmed.to_string()));
    }
    let size = digits
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidSize(trimmed.to_string()))?;

    let (alignment, kind) = split_alignment(name)
        .ok_or_else(|| ParseError::UnknownAlignment(trimmed.to_string()))?;

    // Types have disjoint names, so the first substring hit is the only one.
    let unit_type = ALL_UNIT_TYPES
        .iter()
        .copied()
        .find(|t| kind.contains(t.name()))
        .ok_or_else(|| ParseError::UnknownUnitType(trimmed.to_string()))?;

    Ok(Army::new(alignment, unit_type, size))
}

/// Strips the alignment prefix, returning it and the remaining type part.
fn split_alignment(name: &str) -> Option<(Alignment, &str)> {
    [Alignment::Friendly, Alignment::Enemy]
        .into_iter()
        .find_map(|a| name.strip_prefix(a.name()).map(|rest| (a, rest)))
        .map(|(a, rest)| (a, rest.trim_start_matches(|c: char| matches!(c, '_' | '-' | ' '))))
}

/// Parses a comma- and/or whitespace-separated list of army tokens.
///
/// Returns an empty vector for blank input; the first malformed token aborts
/// the whole parse.
pub fn parse_armies(input: &str) -> Result<Vec<Army>, ParseError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(parse_army)
        .collect()
}

impl FromStr for Army {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_army(s)
    }
}
