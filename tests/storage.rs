//! Integration tests for the persistence seam: blob round-trips, corrupt-blob
//! fallback, and first-run password provisioning.

use placar_web::storage::{
    self, keys, MemoryStorage, Storage, DEFAULT_ADMIN_PASSWORD,
};
use placar_web::{AuditTrail, GameStatus, Score, Sport, TournamentStore, VolleyballScore};

#[test]
fn tournament_blob_round_trips() {
    let mut blobs = MemoryStorage::new();
    let mut store = TournamentStore::new();
    let mut updated = store.find_match(Sport::Volleyball, 101).unwrap().clone();
    updated.score = Score::Volleyball(VolleyballScore {
        sets_a: 3,
        sets_b: 1,
        ..VolleyballScore::new()
    });
    updated.status = GameStatus::Finished;
    store.update_match(Sport::Volleyball, updated);

    storage::save_store(&mut blobs, &store).unwrap();
    let loaded = storage::load_store(&blobs);
    assert_eq!(loaded, store);
    // The stamped winner and propagated slot survive the round trip.
    assert_eq!(
        loaded.find_match(Sport::Volleyball, 105).unwrap().team_a_id,
        Some(101)
    );
}

#[test]
fn absent_blobs_fall_back_to_seeds() {
    let blobs = MemoryStorage::new();
    assert_eq!(storage::load_store(&blobs), TournamentStore::new());
    assert!(storage::load_logs(&blobs).is_empty());
    assert!(storage::load_sessions(&blobs).is_empty());
}

#[test]
fn corrupt_blobs_are_discarded_for_seeds() {
    let mut blobs = MemoryStorage::new();
    blobs.save(keys::TOURNAMENT_DATA, "{not json").unwrap();
    blobs.save(keys::ACTION_LOGS, "42").unwrap();
    assert_eq!(storage::load_store(&blobs), TournamentStore::new());
    assert!(storage::load_logs(&blobs).is_empty());
}

#[test]
fn trail_blobs_round_trip() {
    let mut blobs = MemoryStorage::new();
    let mut trail = AuditTrail::default();
    let ctx = trail.login("ana", "admin123", "admin123").unwrap();
    trail.logout(ctx.session_id);

    storage::save_logs(&mut blobs, &trail.logs).unwrap();
    storage::save_sessions(&mut blobs, &trail.sessions).unwrap();

    let loaded = AuditTrail::new(storage::load_logs(&blobs), storage::load_sessions(&blobs));
    assert_eq!(loaded, trail);
}

#[test]
fn password_is_provisioned_on_first_run() {
    let mut blobs = MemoryStorage::new();
    assert_eq!(storage::load_or_init_password(&mut blobs), DEFAULT_ADMIN_PASSWORD);
    // Provisioning persisted it; a changed secret is honored afterwards.
    assert_eq!(
        blobs.load(keys::ADMIN_PASSWORD).as_deref(),
        Some(DEFAULT_ADMIN_PASSWORD)
    );
    storage::save_password(&mut blobs, "s3cret").unwrap();
    assert_eq!(storage::load_or_init_password(&mut blobs), "s3cret");
}
