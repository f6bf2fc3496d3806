//! Audit log entries, fiscal sessions, and the merged history feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{GameStatus, MatchId, Score, Sport};

/// Kind of logged scoring action.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    ScoreUpdate,
    StatusChange,
}

/// Old/new payload of a logged action, shaped by its kind.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionDetails {
    Score { from: Score, to: Score },
    Status { from: GameStatus, to: GameStatus },
}

/// One append-only audit log entry. Entries are never mutated or deleted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLog {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Acting official; never empty, entries exist only for logged-in fiscals.
    pub fiscal_id: String,
    pub match_id: MatchId,
    pub sport: Sport,
    pub action: ActionKind,
    pub details: ActionDetails,
}

/// A fiscal login session. `logout_time` is stamped at most once.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalSession {
    pub id: Uuid,
    pub fiscal_id: String,
    pub login_time: DateTime<Utc>,
    #[serde(default)]
    pub logout_time: Option<DateTime<Utc>>,
}

/// One entry of the combined history feed: a scoring action, a login, or a
/// logout, merged and sorted by timestamp descending.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HistoryEvent {
    Action(ActionLog),
    Login(FiscalSession),
    Logout(FiscalSession),
}

impl HistoryEvent {
    /// Timestamp the feed sorts by.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            HistoryEvent::Action(log) => log.timestamp,
            HistoryEvent::Login(session) => session.login_time,
            HistoryEvent::Logout(session) => session.logout_time.unwrap_or(session.login_time),
        }
    }
}
