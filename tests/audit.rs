//! Integration tests for the audit trail: login, logout, action recording,
//! and the merged history feed.

use chrono::{Duration, Utc};
use placar_web::{
    ActionDetails, ActionKind, ActionLog, AuditTrail, FiscalSession, GameStatus, HistoryEvent,
    ScoreboardError, Sport,
};
use uuid::Uuid;

const SECRET: &str = "admin123";

fn status_details() -> ActionDetails {
    ActionDetails::Status {
        from: GameStatus::Waiting,
        to: GameStatus::InProgress,
    }
}

#[test]
fn login_with_the_correct_secret_opens_a_session() {
    let mut trail = AuditTrail::default();
    let ctx = trail.login("carlos", SECRET, SECRET).unwrap();
    assert_eq!(ctx.fiscal_id, "carlos");
    assert_eq!(trail.sessions.len(), 1);
    assert_eq!(trail.sessions[0].id, ctx.session_id);
    assert!(trail.sessions[0].logout_time.is_none());
}

#[test]
fn login_with_a_wrong_secret_creates_nothing() {
    let mut trail = AuditTrail::default();
    let err = trail.login("carlos", "Admin123", SECRET).unwrap_err();
    assert_eq!(err, ScoreboardError::InvalidCredentials);
    assert!(trail.sessions.is_empty());
}

#[test]
fn sessions_are_most_recent_first() {
    let mut trail = AuditTrail::default();
    trail.login("first", SECRET, SECRET).unwrap();
    trail.login("second", SECRET, SECRET).unwrap();
    assert_eq!(trail.sessions[0].fiscal_id, "second");
    assert_eq!(trail.sessions[1].fiscal_id, "first");
}

#[test]
fn recording_without_a_context_is_a_no_op() {
    let mut trail = AuditTrail::default();
    trail.record_action(None, 1, Sport::Futsal, ActionKind::StatusChange, status_details());
    assert!(trail.logs.is_empty());
}

#[test]
fn recording_with_a_context_prepends_an_entry() {
    let mut trail = AuditTrail::default();
    let ctx = trail.login("ana", SECRET, SECRET).unwrap();
    trail.record_action(
        Some(&ctx),
        1,
        Sport::Futsal,
        ActionKind::StatusChange,
        status_details(),
    );
    trail.record_action(
        Some(&ctx),
        2,
        Sport::Volleyball,
        ActionKind::StatusChange,
        status_details(),
    );
    assert_eq!(trail.logs.len(), 2);
    assert_eq!(trail.logs[0].match_id, 2);
    assert_eq!(trail.logs[1].match_id, 1);
    assert_eq!(trail.logs[0].fiscal_id, "ana");
}

#[test]
fn logout_stamps_the_session_once_and_ignores_unknown_ids() {
    let mut trail = AuditTrail::default();
    let ctx = trail.login("ana", SECRET, SECRET).unwrap();

    trail.logout(Uuid::new_v4()); // unknown: silent
    assert!(trail.sessions[0].logout_time.is_none());

    trail.logout(ctx.session_id);
    let stamped = trail.sessions[0].logout_time.unwrap();

    trail.logout(ctx.session_id); // already closed: unchanged
    assert_eq!(trail.sessions[0].logout_time, Some(stamped));
}

#[test]
fn context_for_rejects_closed_sessions() {
    let mut trail = AuditTrail::default();
    let ctx = trail.login("ana", SECRET, SECRET).unwrap();
    assert!(trail.context_for(ctx.session_id).is_some());
    trail.logout(ctx.session_id);
    assert!(trail.context_for(ctx.session_id).is_none());
}

#[test]
fn history_merges_and_sorts_descending() {
    let base = Utc::now();
    let session = FiscalSession {
        id: Uuid::new_v4(),
        fiscal_id: "ana".to_string(),
        login_time: base,
        logout_time: Some(base + Duration::seconds(30)),
    };
    let log = ActionLog {
        id: Uuid::new_v4(),
        timestamp: base + Duration::seconds(10),
        fiscal_id: "ana".to_string(),
        match_id: 1,
        sport: Sport::Futsal,
        action: ActionKind::StatusChange,
        details: status_details(),
    };
    let trail = AuditTrail::new(vec![log], vec![session]);

    let feed = trail.history();
    assert_eq!(feed.len(), 3);
    assert!(matches!(feed[0], HistoryEvent::Logout(_)));
    assert!(matches!(feed[1], HistoryEvent::Action(_)));
    assert!(matches!(feed[2], HistoryEvent::Login(_)));
}

#[test]
fn history_ties_keep_insertion_order() {
    let at = Utc::now();
    let entry = |match_id| ActionLog {
        id: Uuid::new_v4(),
        timestamp: at,
        fiscal_id: "ana".to_string(),
        match_id,
        sport: Sport::Futsal,
        action: ActionKind::StatusChange,
        details: status_details(),
    };
    let trail = AuditTrail::new(vec![entry(2), entry(1)], Vec::new());

    let feed = trail.history();
    let ids: Vec<u32> = feed
        .iter()
        .map(|e| match e {
            HistoryEvent::Action(log) => log.match_id,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(ids, vec![2, 1]);
}
