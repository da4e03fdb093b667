//! Application state and composition.

use std::sync::Arc;
use std::time::Duration;

use waldohunt_domain::{GuessEvaluator, Roster};

use crate::infrastructure::{
    clock::SystemClock,
    config::SigningSecret,
    ports::{ClockPort, ScoreRepo},
    session_token::SessionTokenCodec,
};
use crate::use_cases;

/// Main application state.
///
/// Holds all use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub game: use_cases::GameUseCases,
    pub scores: use_cases::ScoreUseCases,
}

impl App {
    /// Wire the application against the system clock.
    pub fn new(
        secret: &SigningSecret,
        session_ttl: Duration,
        roster: Roster,
        scores: Arc<dyn ScoreRepo>,
    ) -> Self {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        Self::with_clock(secret, session_ttl, roster, scores, clock)
    }

    pub fn with_clock(
        secret: &SigningSecret,
        session_ttl: Duration,
        roster: Roster,
        scores: Arc<dyn ScoreRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let codec = Arc::new(SessionTokenCodec::new(
            secret,
            session_ttl,
            roster.clone(),
            clock.clone(),
        ));
        let evaluator = Arc::new(GuessEvaluator::new(roster.clone()));
        let roster = Arc::new(roster);

        let game = use_cases::GameUseCases::new(
            Arc::new(use_cases::game::StartGame::new(codec.clone(), roster.clone())),
            Arc::new(use_cases::game::SubmitGuess::new(
                codec.clone(),
                evaluator,
                clock.clone(),
            )),
            Arc::new(use_cases::game::FinishGame::new(
                codec,
                roster,
                scores.clone(),
                clock,
            )),
        );

        let scores =
            use_cases::ScoreUseCases::new(Arc::new(use_cases::scores::ListScores::new(scores)));

        Self {
            use_cases: UseCases { game, scores },
        }
    }
}
