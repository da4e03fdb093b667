//! Click-to-find guess evaluation.

use crate::entities::{GameSession, Roster};
use crate::value_objects::{CharacterKey, Coordinates};

/// Rejections raised while evaluating a guess.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GuessError {
    #[error("Invalid character name: {0}")]
    InvalidCharacter(String),
    #[error("Coordinates must be finite numbers")]
    InvalidCoordinates,
    #[error("Character already found: {0}")]
    AlreadyFound(CharacterKey),
}

/// A well-formed guess: a roster character and a click position.
#[derive(Debug, Clone, PartialEq)]
pub struct Guess {
    pub character: CharacterKey,
    pub click: Coordinates,
}

/// Result of evaluating a guess against a session.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessOutcome {
    pub is_correct: bool,
    pub all_found: bool,
    /// The state to write into the next token. Equal to the input on a miss.
    pub session: GameSession,
}

impl GuessOutcome {
    pub fn found(&self) -> Vec<CharacterKey> {
        self.session.found().iter().cloned().collect()
    }
}

/// Decides hits against a roster.
#[derive(Debug, Clone)]
pub struct GuessEvaluator {
    roster: Roster,
}

impl GuessEvaluator {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Validate raw guess input without looking at any session.
    pub fn guess(&self, character_name: &str, x: f64, y: f64) -> Result<Guess, GuessError> {
        let entry = self
            .roster
            .get(character_name)
            .ok_or_else(|| GuessError::InvalidCharacter(character_name.to_string()))?;
        let click = Coordinates::new(x, y).map_err(|_| GuessError::InvalidCoordinates)?;

        Ok(Guess {
            character: entry.key.clone(),
            click,
        })
    }

    /// Evaluate `guess` against `session`.
    ///
    /// `now_ms` becomes the end timestamp if this guess completes the
    /// roster and the session has none yet.
    pub fn evaluate(
        &self,
        session: &GameSession,
        guess: &Guess,
        now_ms: i64,
    ) -> Result<GuessOutcome, GuessError> {
        if session.has_found(&guess.character) {
            return Err(GuessError::AlreadyFound(guess.character.clone()));
        }

        let entry = self
            .roster
            .get(guess.character.as_str())
            .ok_or_else(|| GuessError::InvalidCharacter(guess.character.to_string()))?;

        let is_correct = self.roster.target_box().contains(guess.click, entry.location);

        let mut next = session.clone();
        if is_correct {
            next = next.with_found(guess.character.clone());
        }

        let all_found = self.roster.is_complete(next.found());
        if all_found {
            next = next.with_completion(now_ms);
        }

        Ok(GuessOutcome {
            is_correct,
            all_found,
            session: next,
        })
    }
}
