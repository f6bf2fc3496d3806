//! Pure score mutators. Each takes a score and an intent and returns a new
//! score; none of them touches match, round, or team state. Counters clamp at
//! zero instead of erroring.

use serde::{Deserialize, Serialize};

use crate::models::{FutsalScore, Score, SetPoints, Side, VolleyballScore};

/// A score change requested by the presentation layer.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScoreIntent {
    Goal { side: Side, delta: i32 },
    Fault { side: Side, delta: i32 },
    ToggleShootout,
    Penalty { side: Side, index: usize, scored: bool },
    AddPenaltyRound,
    SetCount { side: Side, delta: i32 },
    Point { side: Side, delta: i32 },
    NextSet,
    PrevSet,
}

/// Apply `delta` to a counter, flooring at zero.
fn bump(value: u32, delta: i32) -> u32 {
    if delta >= 0 {
        value.saturating_add(delta as u32)
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}

/// Adjust a side's goal count.
pub fn futsal_goal(score: &FutsalScore, side: Side, delta: i32) -> FutsalScore {
    let mut s = score.clone();
    match side {
        Side::A => s.goals_a = bump(s.goals_a, delta),
        Side::B => s.goals_b = bump(s.goals_b, delta),
    }
    s
}

/// Adjust a side's fault count.
pub fn futsal_fault(score: &FutsalScore, side: Side, delta: i32) -> FutsalScore {
    let mut s = score.clone();
    match side {
        Side::A => s.faults_a = bump(s.faults_a, delta),
        Side::B => s.faults_b = bump(s.faults_b, delta),
    }
    s
}

/// Toggle penalty-shootout mode. Goal and fault tallies are untouched; the
/// shootout is layered on top of the regular score, not a replacement for it.
pub fn futsal_toggle_shootout(score: &FutsalScore) -> FutsalScore {
    let mut s = score.clone();
    s.is_penalty_shootout = !s.is_penalty_shootout;
    s
}

/// Record a penalty kick result at `index` for one side, overwriting a pending
/// marker. An index beyond the recorded sequence is a no-op.
pub fn futsal_penalty(score: &FutsalScore, side: Side, index: usize, scored: bool) -> FutsalScore {
    let mut s = score.clone();
    let kicks = match side {
        Side::A => &mut s.penalties.a,
        Side::B => &mut s.penalties.b,
    };
    if let Some(slot) = kicks.get_mut(index) {
        *slot = Some(scored);
    }
    s
}

/// Append one synchronized pending kick to both sides (sudden death).
pub fn futsal_add_penalty_round(score: &FutsalScore) -> FutsalScore {
    let mut s = score.clone();
    s.penalties.a.push(None);
    s.penalties.b.push(None);
    s
}

/// Adjust a side's set count.
pub fn volleyball_set(score: &VolleyballScore, side: Side, delta: i32) -> VolleyballScore {
    let mut s = score.clone();
    match side {
        Side::A => s.sets_a = bump(s.sets_a, delta),
        Side::B => s.sets_b = bump(s.sets_b, delta),
    }
    s
}

/// Adjust the current set's point tally for a side, allocating zeroed tallies
/// up to the current set if none were recorded yet.
pub fn volleyball_point(score: &VolleyballScore, side: Side, delta: i32) -> VolleyballScore {
    let mut s = score.clone();
    let index = s.current_set.saturating_sub(1) as usize;
    while s.points.len() <= index {
        s.points.push(SetPoints::default());
    }
    let tally = &mut s.points[index];
    match side {
        Side::A => tally.a = bump(tally.a, delta),
        Side::B => tally.b = bump(tally.b, delta),
    }
    s
}

/// Move to an adjacent set. Targets outside 1..=5 are a no-op; the target
/// set's tally is allocated if absent.
pub fn volleyball_change_set(score: &VolleyballScore, delta: i32) -> VolleyballScore {
    let target = score.current_set as i64 + delta as i64;
    if !(1..=5).contains(&target) {
        return score.clone();
    }
    let mut s = score.clone();
    s.current_set = target as u32;
    while s.points.len() < target as usize {
        s.points.push(SetPoints::default());
    }
    s
}

/// Dispatch an intent against a score. Intents for the other sport's score
/// shape are benign no-ops, like every other malformed input in the core.
pub fn apply_intent(score: &Score, intent: ScoreIntent) -> Score {
    match (score, intent) {
        (Score::Futsal(s), ScoreIntent::Goal { side, delta }) => {
            Score::Futsal(futsal_goal(s, side, delta))
        }
        (Score::Futsal(s), ScoreIntent::Fault { side, delta }) => {
            Score::Futsal(futsal_fault(s, side, delta))
        }
        (Score::Futsal(s), ScoreIntent::ToggleShootout) => {
            Score::Futsal(futsal_toggle_shootout(s))
        }
        (Score::Futsal(s), ScoreIntent::Penalty { side, index, scored }) => {
            Score::Futsal(futsal_penalty(s, side, index, scored))
        }
        (Score::Futsal(s), ScoreIntent::AddPenaltyRound) => {
            Score::Futsal(futsal_add_penalty_round(s))
        }
        (Score::Volleyball(s), ScoreIntent::SetCount { side, delta }) => {
            Score::Volleyball(volleyball_set(s, side, delta))
        }
        (Score::Volleyball(s), ScoreIntent::Point { side, delta }) => {
            Score::Volleyball(volleyball_point(s, side, delta))
        }
        (Score::Volleyball(s), ScoreIntent::NextSet) => {
            Score::Volleyball(volleyball_change_set(s, 1))
        }
        (Score::Volleyball(s), ScoreIntent::PrevSet) => {
            Score::Volleyball(volleyball_change_set(s, -1))
        }
        (other, _) => other.clone(),
    }
}
