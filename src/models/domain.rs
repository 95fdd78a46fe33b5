use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a form value is not one of the known option symbols
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

/// Orientation of an apartment inside the building
///
/// The English symbols are canonical on the wire; the Arabic labels used by
/// the registration form are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "بحرى")]
    North,
    #[serde(alias = "قبلى")]
    South,
    #[serde(alias = "شرقى")]
    East,
    #[serde(alias = "غربى")]
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Label shown by the Arabic registration form
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "بحرى",
            Direction::South => "قبلى",
            Direction::East => "شرقى",
            Direction::West => "غربى",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(value) || d.label() == value)
            .ok_or_else(|| UnknownOption {
                kind: "direction",
                value: value.to_string(),
            })
    }
}

/// Desired floor change relative to the resident's current floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WishFloor {
    #[serde(alias = "أعلى")]
    Higher,
    #[serde(alias = "أسفل")]
    Lower,
    #[serde(alias = "أى")]
    Any,
}

impl WishFloor {
    pub const ALL: [WishFloor; 3] = [WishFloor::Higher, WishFloor::Lower, WishFloor::Any];

    pub fn as_str(self) -> &'static str {
        match self {
            WishFloor::Higher => "higher",
            WishFloor::Lower => "lower",
            WishFloor::Any => "any",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WishFloor::Higher => "أعلى",
            WishFloor::Lower => "أسفل",
            WishFloor::Any => "أى",
        }
    }
}

impl fmt::Display for WishFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WishFloor {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        WishFloor::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(value) || w.label() == value)
            .ok_or_else(|| UnknownOption {
                kind: "wish floor",
                value: value.to_string(),
            })
    }
}

/// Desired orientation: a specific direction or no preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WishDirection {
    Toward(Direction),
    Any,
}

impl WishDirection {
    pub const ANY_LABEL: &'static str = "أى";

    /// All five choices offered by the form, directions first
    pub fn options() -> Vec<WishDirection> {
        Direction::ALL
            .into_iter()
            .map(WishDirection::Toward)
            .chain(std::iter::once(WishDirection::Any))
            .collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WishDirection::Toward(direction) => direction.as_str(),
            WishDirection::Any => "any",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WishDirection::Toward(direction) => direction.label(),
            WishDirection::Any => Self::ANY_LABEL,
        }
    }
}

impl fmt::Display for WishDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WishDirection {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("any") || value == Self::ANY_LABEL {
            return Ok(WishDirection::Any);
        }
        value
            .parse::<Direction>()
            .map(WishDirection::Toward)
            .map_err(|_| UnknownOption {
                kind: "wish direction",
                value: value.to_string(),
            })
    }
}

impl TryFrom<String> for WishDirection {
    type Error = UnknownOption;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WishDirection> for String {
    fn from(value: WishDirection) -> Self {
        value.as_str().to_string()
    }
}

/// A resident's current apartment and exchange preferences
///
/// Records reaching this type have already passed boundary validation;
/// the matching core does not re-check them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
    #[serde(rename = "nationalId", alias = "national_id")]
    pub national_id: String,
    pub name: String,
    pub building: String,
    pub floor: i32,
    pub direction: Direction,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "wishFloor", alias = "wish_floor")]
    pub wish_floor: WishFloor,
    #[serde(rename = "wishDirection", alias = "wish_direction")]
    pub wish_direction: WishDirection,
}

/// A ranked exchange proposal for one subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeMatch {
    pub resident: Resident,
    pub score: u8,
}

/// Scoring constants for eligible pairs
///
/// Defaults: base 50, +30 direction bonus, and a floor-proximity bonus of
/// `20 - 10 * diff` inside a two-floor window, capped at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub base: u32,
    pub direction_bonus: u32,
    pub proximity_window: u32,
    pub proximity_peak: u32,
    pub proximity_step: u32,
    pub max_score: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            base: 50,
            direction_bonus: 30,
            proximity_window: 2,
            proximity_peak: 20,
            proximity_step: 10,
            max_score: 100,
        }
    }
}

/// Progress of one match search as seen by the caller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Searching,
    Results(Vec<ExchangeMatch>),
    NotFound,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchState::Results(_) | SearchState::NotFound)
    }
}
