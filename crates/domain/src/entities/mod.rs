//! Domain entities - Core business objects

mod roster;
mod score;
mod session;

pub use roster::{Roster, RosterEntry};
pub use score::{FinalizeError, Score, ScoreDraft};
pub use session::{elapsed_between, GameSession};
