//! Scoreboard business logic: score mutators, winner resolution, seed
//! brackets, and the match update state machine.

mod bracket;
mod score_ops;
mod update;
mod winner;

pub use bracket::{seed_bracket, SportData};
pub use score_ops::{
    apply_intent, futsal_add_penalty_round, futsal_fault, futsal_goal, futsal_penalty,
    futsal_toggle_shootout, volleyball_change_set, volleyball_point, volleyball_set, ScoreIntent,
};
pub use update::{apply_match_update, MatchEvent};
pub use winner::resolve_winner;
