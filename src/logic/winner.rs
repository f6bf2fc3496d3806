//! Winner resolution for a finished match.

use crate::models::{GameMatch, Score, Side, TeamId};

/// Derive the winner of a match from its score.
///
/// Volleyball: strictly more sets wins. Futsal: strictly more goals wins; on a
/// goal tie, strictly more converted penalties (decided kicks only). Any full
/// tie, or an unfilled team slot, yields no winner.
///
/// This runs once, at the moment the match transitions into Finished; later
/// score edits while still Finished do not re-run it (the winner is a
/// one-time-computed fact).
pub fn resolve_winner(game: &GameMatch) -> Option<TeamId> {
    match &game.score {
        Score::Volleyball(s) => {
            if s.sets_a > s.sets_b {
                game.team_a_id
            } else if s.sets_b > s.sets_a {
                game.team_b_id
            } else {
                None
            }
        }
        Score::Futsal(s) => {
            if s.goals_a > s.goals_b {
                game.team_a_id
            } else if s.goals_b > s.goals_a {
                game.team_b_id
            } else {
                let a = s.penalties.conversions(Side::A);
                let b = s.penalties.conversions(Side::B);
                if a > b {
                    game.team_a_id
                } else if b > a {
                    game.team_b_id
                } else {
                    None
                }
            }
        }
    }
}
