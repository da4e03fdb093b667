use std::sync::Arc;

use waldohunt_domain::{GameSession, GuessError, GuessEvaluator};

use crate::infrastructure::ports::ClockPort;
use crate::infrastructure::session_token::{SessionTokenCodec, TokenError};

/// Raw guess as received from the client.
#[derive(Debug, Clone, Default)]
pub struct GuessInput {
    pub session_token: Option<String>,
    pub character_name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct GuessResult {
    pub is_correct: bool,
    pub found: Vec<String>,
    pub all_found: bool,
    /// Always freshly signed, hit or miss.
    pub session_token: String,
}

/// Use case for checking a click against a character's hiding spot.
pub struct SubmitGuess {
    codec: Arc<SessionTokenCodec>,
    evaluator: Arc<GuessEvaluator>,
    clock: Arc<dyn ClockPort>,
}

impl SubmitGuess {
    pub fn new(
        codec: Arc<SessionTokenCodec>,
        evaluator: Arc<GuessEvaluator>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            codec,
            evaluator,
            clock,
        }
    }

    /// Input is validated before the token is looked at, so a bad character
    /// name is reported even when the token is also bad.
    pub fn execute(&self, input: GuessInput) -> Result<GuessResult, SubmitGuessError> {
        let name = input.character_name.unwrap_or_default();
        let (x, y) = match (input.x, input.y) {
            (Some(x), Some(y)) => (x, y),
            _ => (f64::NAN, f64::NAN),
        };
        let guess = self
            .evaluator
            .guess(&name, x, y)
            .map_err(|e| SubmitGuessError::from_guess(e, None))?;

        let session = self
            .codec
            .verify(input.session_token.as_deref().unwrap_or_default())?;

        let outcome = self
            .evaluator
            .evaluate(&session, &guess, self.clock.now().timestamp_millis())
            .map_err(|e| SubmitGuessError::from_guess(e, Some(&session)))?;

        let (next, token) = self.codec.reissue(
            &session,
            outcome.session.found().clone(),
            outcome.session.ended_at_ms(),
        )?;

        tracing::debug!(
            character = %guess.character,
            is_correct = outcome.is_correct,
            all_found = outcome.all_found,
            "Evaluated guess"
        );

        Ok(GuessResult {
            is_correct: outcome.is_correct,
            found: next.found().iter().map(|k| k.to_string()).collect(),
            all_found: outcome.all_found,
            session_token: token.token,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitGuessError {
    #[error("Invalid character name: {0}")]
    InvalidCharacter(String),
    #[error("Coordinates must be finite numbers")]
    InvalidCoordinates,
    #[error("Character already found: {character}")]
    AlreadyFound { character: String, found: Vec<String> },
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl SubmitGuessError {
    /// `session` supplies the found list reported with `AlreadyFound`.
    fn from_guess(err: GuessError, session: Option<&GameSession>) -> Self {
        match err {
            GuessError::InvalidCharacter(name) => Self::InvalidCharacter(name),
            GuessError::InvalidCoordinates => Self::InvalidCoordinates,
            GuessError::AlreadyFound(character) => Self::AlreadyFound {
                character: character.to_string(),
                found: session
                    .map(|s| s.found().iter().map(|k| k.to_string()).collect())
                    .unwrap_or_default(),
            },
        }
    }
}
