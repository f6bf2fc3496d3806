//! Canonical seed brackets: the fixed team counts, pairings, ids, and round
//! labels each sport starts from (and returns to on reset).

use serde::{Deserialize, Serialize};

use crate::models::{BracketRound, GameMatch, Sport, Team};

/// Everything the store owns for one sport: its roster and its bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SportData {
    pub teams: Vec<Team>,
    pub rounds: Vec<BracketRound>,
}

/// The canonical initial layout for a sport: futsal is 16 teams over 4 rounds,
/// volleyball 8 teams over 3. First-round matches are pre-seeded with team
/// pairings; later rounds start with empty slots.
pub fn seed_bracket(sport: Sport) -> SportData {
    match sport {
        Sport::Futsal => futsal_seed(),
        Sport::Volleyball => volleyball_seed(),
    }
}

fn futsal_seed() -> SportData {
    let teams = (1..=16)
        .map(|i| Team::new(i, format!("Time Futsal {}", i)))
        .collect();
    let rounds = vec![
        BracketRound {
            id: 1,
            name: "Oitavas de Final".to_string(),
            matches: (0..8)
                .map(|i| {
                    GameMatch::new(i + 1, Sport::Futsal, Some(i * 2 + 1), Some(i * 2 + 2))
                })
                .collect(),
        },
        BracketRound {
            id: 2,
            name: "Quartas de Final".to_string(),
            matches: (0..4).map(|i| GameMatch::new(9 + i, Sport::Futsal, None, None)).collect(),
        },
        BracketRound {
            id: 3,
            name: "Semifinal".to_string(),
            matches: (0..2).map(|i| GameMatch::new(13 + i, Sport::Futsal, None, None)).collect(),
        },
        BracketRound {
            id: 4,
            name: "Final".to_string(),
            matches: vec![GameMatch::new(15, Sport::Futsal, None, None)],
        },
    ];
    SportData { teams, rounds }
}

fn volleyball_seed() -> SportData {
    let teams = (1..=8)
        .map(|i| Team::new(100 + i, format!("Time Vôlei {}", i)))
        .collect();
    let rounds = vec![
        BracketRound {
            id: 101,
            name: "Quartas de Final".to_string(),
            matches: (0..4)
                .map(|i| {
                    GameMatch::new(
                        101 + i,
                        Sport::Volleyball,
                        Some(101 + i * 2),
                        Some(102 + i * 2),
                    )
                })
                .collect(),
        },
        BracketRound {
            id: 102,
            name: "Semifinal".to_string(),
            matches: (0..2)
                .map(|i| GameMatch::new(105 + i, Sport::Volleyball, None, None))
                .collect(),
        },
        BracketRound {
            id: 103,
            name: "Final".to_string(),
            matches: vec![GameMatch::new(107, Sport::Volleyball, None, None)],
        },
    ];
    SportData { teams, rounds }
}
