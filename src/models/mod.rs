//! Data structures for the scoreboard: teams, scores, matches, audit history.

mod error;
mod game;
mod history;
mod score;
mod team;

pub use error::ScoreboardError;
pub use game::{BracketRound, GameMatch, GameStatus, MatchId};
pub use history::{ActionDetails, ActionKind, ActionLog, FiscalSession, HistoryEvent};
pub use score::{FutsalScore, PenaltySeries, Score, SetPoints, Side, VolleyballScore};
pub use team::{Sport, Team, TeamId};
