//! Waldohunt domain.
//!
//! Pure game rules for the hidden-character game: the character roster and
//! its target window, the session state carried inside a signed token, guess
//! evaluation, and the leaderboard score rules. Nothing here performs I/O;
//! time is always passed in as epoch milliseconds.

pub mod entities;
pub mod error;
pub mod guess;
pub mod ids;
pub mod value_objects;

pub use entities::{
    elapsed_between, FinalizeError, GameSession, Roster, RosterEntry, Score, ScoreDraft,
};
pub use error::DomainError;
pub use guess::{Guess, GuessError, GuessEvaluator, GuessOutcome};
pub use ids::ScoreId;
pub use value_objects::{
    CharacterKey, Coordinates, PlayerName, ScoreMessage, TargetBox, MAX_PLAYER_NAME_LENGTH,
};
