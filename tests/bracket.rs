//! Integration tests for bracket progression: winner propagation, reset, and
//! the idempotence of the match update entry point.

use placar_web::{
    seed_bracket, FutsalScore, GameMatch, GameStatus, Score, Sport, TournamentStore,
    VolleyballScore,
};

/// The seeded futsal match at `id`, with goals and status applied on top.
fn futsal_update(store: &TournamentStore, id: u32, goals: (u32, u32), status: GameStatus) -> GameMatch {
    let mut m = store.find_match(Sport::Futsal, id).unwrap().clone();
    m.score = Score::Futsal(FutsalScore {
        goals_a: goals.0,
        goals_b: goals.1,
        ..FutsalScore::new()
    });
    m.status = status;
    m
}

#[test]
fn finishing_round_one_match_fills_slot_a_of_next_round() {
    let mut store = TournamentStore::new();
    // Round 1 position 0: teams 1 vs 2. Team 1 wins 1-0.
    let updated = futsal_update(&store, 1, (1, 0), GameStatus::Finished);
    store.update_match(Sport::Futsal, updated);

    let finished = store.find_match(Sport::Futsal, 1).unwrap();
    assert_eq!(finished.winner_id, Some(1));
    let next = store.find_match(Sport::Futsal, 9).unwrap();
    assert_eq!(next.team_a_id, Some(1));
    assert_eq!(next.team_b_id, None);
}

#[test]
fn odd_position_fills_slot_b() {
    let mut store = TournamentStore::new();
    // Round 1 position 1 (match id 2): teams 3 vs 4. Team 4 wins 0-2.
    let updated = futsal_update(&store, 2, (0, 2), GameStatus::Finished);
    store.update_match(Sport::Futsal, updated);

    let next = store.find_match(Sport::Futsal, 9).unwrap();
    assert_eq!(next.team_a_id, None);
    assert_eq!(next.team_b_id, Some(4));
}

#[test]
fn propagation_touches_exactly_one_slot() {
    let mut store = TournamentStore::new();
    let before = store.clone();
    let updated = futsal_update(&store, 1, (1, 0), GameStatus::Finished);
    store.update_match(Sport::Futsal, updated.clone());

    // Everything except match 1 (replaced) and match 9 slot A is untouched.
    for round in &store.futsal.rounds {
        for m in &round.matches {
            match m.id {
                1 => {
                    assert_eq!(m.status, GameStatus::Finished);
                    assert_eq!(m.winner_id, Some(1));
                }
                9 => {
                    let seeded = before.find_match(Sport::Futsal, 9).unwrap();
                    assert_eq!(m.team_a_id, Some(1));
                    assert_eq!(m.team_b_id, seeded.team_b_id);
                    assert_eq!(m.status, seeded.status);
                    assert_eq!(m.score, seeded.score);
                }
                id => assert_eq!(m, before.find_match(Sport::Futsal, id).unwrap()),
            }
        }
    }
    assert_eq!(store.volleyball, before.volleyball);
}

#[test]
fn finishing_the_final_does_not_propagate() {
    let mut store = TournamentStore::new();
    let mut updated = store.find_match(Sport::Volleyball, 107).unwrap().clone();
    updated.team_a_id = Some(101);
    updated.team_b_id = Some(102);
    updated.score = Score::Volleyball(VolleyballScore {
        sets_a: 3,
        sets_b: 0,
        ..VolleyballScore::new()
    });
    updated.status = GameStatus::Finished;
    store.update_match(Sport::Volleyball, updated);

    let final_match = store.find_match(Sport::Volleyball, 107).unwrap();
    assert_eq!(final_match.winner_id, Some(101));
    assert_eq!(store.volleyball.rounds.len(), 3);
}

#[test]
fn replaying_the_same_update_is_idempotent() {
    let mut store = TournamentStore::new();
    let updated = futsal_update(&store, 1, (2, 1), GameStatus::Finished);

    let first = store.update_match(Sport::Futsal, updated.clone());
    assert_eq!(first.len(), 2); // score changed + status changed
    let snapshot = store.clone();

    let second = store.update_match(Sport::Futsal, updated);
    assert!(second.is_empty());
    assert_eq!(store, snapshot);
}

#[test]
fn unknown_match_id_is_a_no_op() {
    let mut store = TournamentStore::new();
    let before = store.clone();
    let mut bogus = store.find_match(Sport::Futsal, 1).unwrap().clone();
    bogus.id = 999;
    let events = store.update_match(Sport::Futsal, bogus);
    assert!(events.is_empty());
    assert_eq!(store, before);
}

#[test]
fn leaving_finished_clears_the_winner() {
    let mut store = TournamentStore::new();
    store.update_match(
        Sport::Futsal,
        futsal_update(&store, 1, (1, 0), GameStatus::Finished),
    );
    assert_eq!(store.find_match(Sport::Futsal, 1).unwrap().winner_id, Some(1));

    store.update_match(
        Sport::Futsal,
        futsal_update(&store, 1, (1, 0), GameStatus::InProgress),
    );
    let reopened = store.find_match(Sport::Futsal, 1).unwrap();
    assert_eq!(reopened.status, GameStatus::InProgress);
    assert_eq!(reopened.winner_id, None);
}

#[test]
fn score_edits_while_finished_keep_the_stamped_winner() {
    let mut store = TournamentStore::new();
    store.update_match(
        Sport::Futsal,
        futsal_update(&store, 1, (2, 0), GameStatus::Finished),
    );

    // Edit the score without leaving Finished: the winner is not recomputed.
    let edited = futsal_update(&store, 1, (2, 5), GameStatus::Finished);
    let events = store.update_match(Sport::Futsal, edited);
    assert_eq!(events.len(), 1); // only the score delta

    let m = store.find_match(Sport::Futsal, 1).unwrap();
    assert_eq!(m.winner_id, Some(1));
    assert_eq!(
        store.find_match(Sport::Futsal, 9).unwrap().team_a_id,
        Some(1)
    );
}

#[test]
fn teams_in_use_tracks_occupied_slots_exactly() {
    let mut store = TournamentStore::new();
    let seeded: Vec<u32> = (1..=16).collect();
    assert_eq!(
        store.teams_in_use(Sport::Futsal).into_iter().collect::<Vec<_>>(),
        seeded
    );

    // A propagated winner adds no new ids; replacing a first-round pairing
    // with nulls removes those teams from use.
    store.update_match(
        Sport::Futsal,
        futsal_update(&store, 1, (1, 0), GameStatus::Finished),
    );
    assert_eq!(
        store.teams_in_use(Sport::Futsal).into_iter().collect::<Vec<_>>(),
        seeded
    );

    let mut vacated = store.find_match(Sport::Futsal, 3).unwrap().clone();
    vacated.team_a_id = None;
    vacated.team_b_id = None;
    store.update_match(Sport::Futsal, vacated);
    let in_use = store.teams_in_use(Sport::Futsal);
    assert!(!in_use.contains(&5));
    assert!(!in_use.contains(&6));
    assert_eq!(in_use.len(), 14);
}

#[test]
fn reset_restores_the_canonical_volleyball_layout() {
    let mut store = TournamentStore::new();
    let mut updated = store.find_match(Sport::Volleyball, 101).unwrap().clone();
    updated.score = Score::Volleyball(VolleyballScore {
        sets_a: 3,
        sets_b: 1,
        ..VolleyballScore::new()
    });
    updated.status = GameStatus::Finished;
    store.update_match(Sport::Volleyball, updated);
    store.update_teams(Sport::Volleyball, Vec::new());

    store.reset_tournament(Sport::Volleyball);

    let seed = seed_bracket(Sport::Volleyball);
    assert_eq!(store.volleyball, seed);
    assert_eq!(seed.teams.len(), 8);
    assert!(store
        .volleyball
        .rounds
        .iter()
        .flat_map(|r| r.matches.iter())
        .all(|m| m.status == GameStatus::Waiting && m.winner_id.is_none()));
}
