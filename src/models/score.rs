//! Sport-specific score shapes. Field names serialize in camelCase so blobs
//! written by earlier versions of the scoreboard load unchanged.

use serde::{Deserialize, Serialize};

use crate::models::Sport;

/// Which side of a match a score action applies to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
}

/// Penalty shootout sequences for both sides. `None` is a pending kick,
/// `Some(true)` converted, `Some(false)` missed. Both sides are kept at the
/// same length for display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PenaltySeries {
    pub a: Vec<Option<bool>>,
    pub b: Vec<Option<bool>>,
}

impl PenaltySeries {
    /// The standard three initial kicks per side, all pending.
    pub fn new() -> Self {
        Self {
            a: vec![None; 3],
            b: vec![None; 3],
        }
    }

    /// Converted kicks for one side; only decided slots count.
    pub fn conversions(&self, side: Side) -> usize {
        let kicks = match side {
            Side::A => &self.a,
            Side::B => &self.b,
        };
        kicks.iter().filter(|k| **k == Some(true)).count()
    }
}

impl Default for PenaltySeries {
    fn default() -> Self {
        Self::new()
    }
}

/// Futsal scoreboard: goals and faults per side, plus an optional penalty
/// shootout layered on top of (not replacing) the goal tally.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutsalScore {
    pub goals_a: u32,
    pub goals_b: u32,
    pub faults_a: u32,
    pub faults_b: u32,
    pub is_penalty_shootout: bool,
    pub penalties: PenaltySeries,
}

impl FutsalScore {
    pub fn new() -> Self {
        Self {
            goals_a: 0,
            goals_b: 0,
            faults_a: 0,
            faults_b: 0,
            is_penalty_shootout: false,
            penalties: PenaltySeries::new(),
        }
    }
}

impl Default for FutsalScore {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-set point tally.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SetPoints {
    pub a: u32,
    pub b: u32,
}

/// Volleyball scoreboard: sets won per side, per-set point tallies indexed by
/// set number, and faults. `current_set` stays within 1..=5.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolleyballScore {
    pub sets_a: u32,
    pub sets_b: u32,
    pub current_set: u32,
    pub points: Vec<SetPoints>,
    pub faults_a: u32,
    pub faults_b: u32,
}

impl VolleyballScore {
    pub fn new() -> Self {
        Self {
            sets_a: 0,
            sets_b: 0,
            current_set: 1,
            points: vec![SetPoints::default()],
            faults_a: 0,
            faults_b: 0,
        }
    }
}

impl Default for VolleyballScore {
    fn default() -> Self {
        Self::new()
    }
}

/// Score of a match. The variant is fixed by the match's sport for its whole
/// lifetime; consumers match exhaustively, so a sport/score mismatch cannot
/// slip through. Serialized untagged: the two field sets are disjoint, and the
/// stored JSON carries the bare score object.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Futsal(FutsalScore),
    Volleyball(VolleyballScore),
}

impl Score {
    /// Fresh zeroed score for the given sport.
    pub fn new_for(sport: Sport) -> Self {
        match sport {
            Sport::Futsal => Score::Futsal(FutsalScore::new()),
            Sport::Volleyball => Score::Volleyball(VolleyballScore::new()),
        }
    }
}
