//! Match and bracket round entities.

use serde::{Deserialize, Serialize};

use crate::models::{Score, Sport, TeamId};

/// Identifier for a match. Unique across both sports.
pub type MatchId = u32;

/// Lifecycle of a match. Transitions are not restricted to the usual
/// Waiting -> InProgress -> Finished order; the official may move a match back.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Waiting,
    InProgress,
    Finished,
}

/// A single bracket match. Team slots are `None` until bracket progression
/// fills them; `winner_id` is meaningful only while the match is Finished.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub id: MatchId,
    pub sport: Sport,
    pub team_a_id: Option<TeamId>,
    pub team_b_id: Option<TeamId>,
    pub status: GameStatus,
    #[serde(default)]
    pub winner_id: Option<TeamId>,
    pub score: Score,
}

impl GameMatch {
    /// New Waiting match with a zeroed score for the sport.
    pub fn new(
        id: MatchId,
        sport: Sport,
        team_a_id: Option<TeamId>,
        team_b_id: Option<TeamId>,
    ) -> Self {
        Self {
            id,
            sport,
            team_a_id,
            team_b_id,
            status: GameStatus::Waiting,
            winner_id: None,
            score: Score::new_for(sport),
        }
    }
}

/// One elimination round: an ordered list of matches. Match at position `i`
/// feeds match `i / 2` of the following round, slot A when `i` is even.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketRound {
    pub id: u32,
    pub name: String,
    pub matches: Vec<GameMatch>,
}
