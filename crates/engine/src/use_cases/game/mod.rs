//! Game use cases.
//!
//! Starting a game, submitting guesses and finishing a game. None of them
//! keeps state between calls: progress travels in the session token.

use std::sync::Arc;

mod finish;
mod guess;
mod start;

pub use finish::{FinishGame, FinishGameError, FinishGameInput, FinishedGame};
pub use guess::{GuessInput, GuessResult, SubmitGuess, SubmitGuessError};
pub use start::{StartGame, StartGameError, StartedGame};

/// Container for game use cases.
pub struct GameUseCases {
    pub start: Arc<StartGame>,
    pub guess: Arc<SubmitGuess>,
    pub finish: Arc<FinishGame>,
}

impl GameUseCases {
    pub fn new(start: Arc<StartGame>, guess: Arc<SubmitGuess>, finish: Arc<FinishGame>) -> Self {
        Self {
            start,
            guess,
            finish,
        }
    }
}
