//! Tournament store: sole owner and mutator of both sports' rosters and
//! brackets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::logic::{apply_match_update, seed_bracket, MatchEvent, SportData};
use crate::models::{GameMatch, MatchId, Sport, Team, TeamId};

/// All tournament data, keyed by sport. Serializes as the `tournamentData`
/// blob: `{"futsal": {...}, "volleyball": {...}}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentStore {
    pub futsal: SportData,
    pub volleyball: SportData,
}

impl TournamentStore {
    /// Both sports at their canonical seed layout.
    pub fn new() -> Self {
        Self {
            futsal: seed_bracket(Sport::Futsal),
            volleyball: seed_bracket(Sport::Volleyball),
        }
    }

    pub fn data(&self, sport: Sport) -> &SportData {
        match sport {
            Sport::Futsal => &self.futsal,
            Sport::Volleyball => &self.volleyball,
        }
    }

    fn data_mut(&mut self, sport: Sport) -> &mut SportData {
        match sport {
            Sport::Futsal => &mut self.futsal,
            Sport::Volleyball => &mut self.volleyball,
        }
    }

    /// Look up a match by id within a sport's rounds.
    pub fn find_match(&self, sport: Sport, id: MatchId) -> Option<&GameMatch> {
        self.data(sport)
            .rounds
            .iter()
            .flat_map(|r| r.matches.iter())
            .find(|m| m.id == id)
    }

    /// Apply a complete updated match. Unknown match ids are a silent no-op.
    /// Returns the audit events the update emitted, for the caller to record.
    pub fn update_match(&mut self, sport: Sport, updated: GameMatch) -> Vec<MatchEvent> {
        let Some(previous) = self.find_match(sport, updated.id).cloned() else {
            return Vec::new();
        };
        apply_match_update(&mut self.data_mut(sport).rounds, updated, &previous)
    }

    /// Replace a sport's roster wholesale. In-use validation is advisory and
    /// belongs to the caller (`teams_in_use`).
    pub fn update_teams(&mut self, sport: Sport, teams: Vec<Team>) {
        self.data_mut(sport).teams = teams;
    }

    /// Discard a sport's rounds and roster and reinitialize to the canonical
    /// seed. Irreversible.
    pub fn reset_tournament(&mut self, sport: Sport) {
        *self.data_mut(sport) = seed_bracket(sport);
    }

    /// Team ids currently occupying a slot anywhere in the sport's bracket.
    /// Used to block deletion of a referenced team.
    pub fn teams_in_use(&self, sport: Sport) -> BTreeSet<TeamId> {
        self.data(sport)
            .rounds
            .iter()
            .flat_map(|r| r.matches.iter())
            .flat_map(|m| [m.team_a_id, m.team_b_id])
            .flatten()
            .collect()
    }
}

impl Default for TournamentStore {
    fn default() -> Self {
        Self::new()
    }
}
