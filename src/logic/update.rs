//! The match update state machine: the single entry point through which a
//! match changes, emitting audit events and advancing winners into the next
//! round.

use crate::logic::winner::resolve_winner;
use crate::models::{ActionDetails, ActionKind, BracketRound, GameMatch, GameStatus};

/// An audit event emitted by a match update, ready to be recorded against the
/// acting fiscal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchEvent {
    pub kind: ActionKind,
    pub details: ActionDetails,
}

/// Apply a complete updated match to a sport's rounds.
///
/// 1. Diffs `previous` vs `updated` and returns a `ScoreUpdate` and/or
///    `StatusChange` event for each field that changed.
/// 2. On the transition into Finished the winner is resolved and stamped; on
///    the transition out of Finished it is cleared. While the match stays
///    Finished the previously stamped winner is kept, even if the score was
///    edited (the winner is a one-time-computed fact).
/// 3. Replaces the match by id inside its round; no other match is touched.
/// 4. If the match is Finished with a winner, writes the winner into the next
///    round: position `i` feeds slot A (`i` even) or B (`i` odd) of match
///    `i / 2`. The last round never propagates.
///
/// Replaying the same update is idempotent: no events are emitted and the
/// rounds come out identical.
pub fn apply_match_update(
    rounds: &mut [BracketRound],
    mut updated: GameMatch,
    previous: &GameMatch,
) -> Vec<MatchEvent> {
    let mut events = Vec::new();
    if previous.score != updated.score {
        events.push(MatchEvent {
            kind: ActionKind::ScoreUpdate,
            details: ActionDetails::Score {
                from: previous.score.clone(),
                to: updated.score.clone(),
            },
        });
    }
    if previous.status != updated.status {
        events.push(MatchEvent {
            kind: ActionKind::StatusChange,
            details: ActionDetails::Status {
                from: previous.status,
                to: updated.status,
            },
        });
    }

    updated.winner_id = match (previous.status, updated.status) {
        (GameStatus::Finished, GameStatus::Finished) => previous.winner_id,
        (_, GameStatus::Finished) => resolve_winner(&updated),
        _ => None,
    };

    let Some((round_index, position)) = locate(rounds, updated.id) else {
        return events;
    };
    let finished_winner = match (updated.status, updated.winner_id) {
        (GameStatus::Finished, Some(winner)) => Some(winner),
        _ => None,
    };
    rounds[round_index].matches[position] = updated;

    if let Some(winner) = finished_winner {
        if let Some(next_round) = rounds.get_mut(round_index + 1) {
            if let Some(target) = next_round.matches.get_mut(position / 2) {
                if position % 2 == 0 {
                    target.team_a_id = Some(winner);
                } else {
                    target.team_b_id = Some(winner);
                }
            }
        }
    }

    events
}

/// Round index and in-round position of a match id.
fn locate(rounds: &[BracketRound], id: u32) -> Option<(usize, usize)> {
    for (round_index, round) in rounds.iter().enumerate() {
        if let Some(position) = round.matches.iter().position(|m| m.id == id) {
            return Some((round_index, position));
        }
    }
    None
}
