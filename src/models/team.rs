//! Team roster entries and the Sport discriminant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::ScoreboardError;

/// Identifier for a team. Unique only within one sport's roster; the two
/// sports' id spaces are stored independently and may overlap.
pub type TeamId = u32;

/// A team in one sport's roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The two sports the scoreboard manages. Each owns its own roster and bracket.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Futsal,
    Volleyball,
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sport::Futsal => write!(f, "futsal"),
            Sport::Volleyball => write!(f, "volleyball"),
        }
    }
}

impl FromStr for Sport {
    type Err = ScoreboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "futsal" => Ok(Sport::Futsal),
            "volleyball" => Ok(Sport::Volleyball),
            other => Err(ScoreboardError::UnknownSport(other.to_string())),
        }
    }
}
