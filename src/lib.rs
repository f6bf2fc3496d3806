//! Futsal and volleyball bracket scoreboard: library with models, bracket
//! logic, the tournament store, audit trail, and the persistence seam.

pub mod audit;
pub mod logic;
pub mod models;
pub mod storage;
pub mod store;

pub use audit::{AuditTrail, FiscalContext};
pub use logic::{
    apply_intent, apply_match_update, resolve_winner, seed_bracket, MatchEvent, ScoreIntent,
    SportData,
};
pub use models::{
    ActionDetails, ActionKind, ActionLog, BracketRound, FiscalSession, FutsalScore, GameMatch,
    GameStatus, HistoryEvent, MatchId, PenaltySeries, Score, ScoreboardError, SetPoints, Side,
    Sport, Team, TeamId, VolleyballScore,
};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::TournamentStore;
