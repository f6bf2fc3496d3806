//! Audit log and fiscal session tracking.
//!
//! The acting identity is an explicit [`FiscalContext`] handed out by `login`
//! and threaded into every operation that needs one; there is no ambient
//! "current fiscal".

use chrono::Utc;
use uuid::Uuid;

use crate::models::{
    ActionDetails, ActionKind, ActionLog, FiscalSession, HistoryEvent, MatchId, ScoreboardError,
    Sport,
};

/// The authenticated official acting on the scoreboard.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FiscalContext {
    pub fiscal_id: String,
    pub session_id: Uuid,
}

/// Append-only action log plus login sessions, both most-recent-first.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AuditTrail {
    pub logs: Vec<ActionLog>,
    pub sessions: Vec<FiscalSession>,
}

impl AuditTrail {
    pub fn new(logs: Vec<ActionLog>, sessions: Vec<FiscalSession>) -> Self {
        Self { logs, sessions }
    }

    /// Record one scoring action. Without an authenticated context this is a
    /// no-op: log entries exist only for logged-in fiscals.
    pub fn record_action(
        &mut self,
        ctx: Option<&FiscalContext>,
        match_id: MatchId,
        sport: Sport,
        action: ActionKind,
        details: ActionDetails,
    ) {
        let Some(ctx) = ctx else { return };
        self.logs.insert(
            0,
            ActionLog {
                id: Uuid::new_v4(),
                timestamp: Utc::now(),
                fiscal_id: ctx.fiscal_id.clone(),
                match_id,
                sport,
                action,
                details,
            },
        );
    }

    /// Open a session for `fiscal_id` if `supplied` matches the shared secret
    /// exactly (case-sensitive). On failure nothing is created.
    pub fn login(
        &mut self,
        fiscal_id: &str,
        supplied: &str,
        secret: &str,
    ) -> Result<FiscalContext, ScoreboardError> {
        if supplied != secret {
            return Err(ScoreboardError::InvalidCredentials);
        }
        let session = FiscalSession {
            id: Uuid::new_v4(),
            fiscal_id: fiscal_id.to_string(),
            login_time: Utc::now(),
            logout_time: None,
        };
        let ctx = FiscalContext {
            fiscal_id: session.fiscal_id.clone(),
            session_id: session.id,
        };
        self.sessions.insert(0, session);
        Ok(ctx)
    }

    /// Stamp `logout_time` on the matching open session. Unknown or already
    /// closed sessions are a silent no-op; the stamp is set at most once.
    pub fn logout(&mut self, session_id: Uuid) {
        if let Some(session) = self
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id && s.logout_time.is_none())
        {
            session.logout_time = Some(Utc::now());
        }
    }

    /// Context for a session id, if that session exists and is still open.
    pub fn context_for(&self, session_id: Uuid) -> Option<FiscalContext> {
        self.sessions
            .iter()
            .find(|s| s.id == session_id && s.logout_time.is_none())
            .map(|s| FiscalContext {
                fiscal_id: s.fiscal_id.clone(),
                session_id: s.id,
            })
    }

    /// Combined read-only feed: actions, logins, and logouts merged and sorted
    /// by timestamp descending. The sort is stable, so timestamp ties keep
    /// their insertion order.
    pub fn history(&self) -> Vec<HistoryEvent> {
        let mut feed: Vec<HistoryEvent> = self
            .logs
            .iter()
            .cloned()
            .map(HistoryEvent::Action)
            .collect();
        feed.extend(self.sessions.iter().cloned().map(HistoryEvent::Login));
        feed.extend(
            self.sessions
                .iter()
                .filter(|s| s.logout_time.is_some())
                .cloned()
                .map(HistoryEvent::Logout),
        );
        feed.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        feed
    }
}
