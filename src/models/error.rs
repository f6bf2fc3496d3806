//! Errors surfaced by scoreboard operations.
//!
//! Most invalid inputs are deliberately silent no-ops (unknown match id,
//! unknown session, action without a logged-in fiscal); only the cases a
//! caller must react to become errors.

/// Errors that can occur during scoreboard operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScoreboardError {
    /// Supplied password does not match the shared secret.
    InvalidCredentials,
    /// Sport name not recognized (expected "futsal" or "volleyball").
    UnknownSport(String),
}

impl std::fmt::Display for ScoreboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreboardError::InvalidCredentials => write!(f, "Incorrect username or password"),
            ScoreboardError::UnknownSport(s) => write!(f, "Unknown sport: {}", s),
        }
    }
}
