use std::sync::Arc;

use waldohunt_domain::{FinalizeError, Roster, Score, ScoreDraft, ScoreId};

use crate::infrastructure::ports::{ClockPort, RepoError, ScoreRepo};
use crate::infrastructure::session_token::{SessionTokenCodec, TokenError};

#[derive(Debug, Clone, Default)]
pub struct FinishGameInput {
    pub session_token: Option<String>,
    pub player_name: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FinishedGame {
    pub score: Score,
    pub started_at_ms: i64,
    pub ended_at_ms: i64,
    pub elapsed_ms: i64,
}

/// Use case for turning a completed session into a leaderboard entry.
pub struct FinishGame {
    codec: Arc<SessionTokenCodec>,
    roster: Arc<Roster>,
    scores: Arc<dyn ScoreRepo>,
    clock: Arc<dyn ClockPort>,
}

impl FinishGame {
    pub fn new(
        codec: Arc<SessionTokenCodec>,
        roster: Arc<Roster>,
        scores: Arc<dyn ScoreRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            codec,
            roster,
            scores,
            clock,
        }
    }

    /// Elapsed time comes from the timestamps signed into the token, never
    /// from the time of this request.
    pub async fn execute(&self, input: FinishGameInput) -> Result<FinishedGame, FinishGameError> {
        let session = self
            .codec
            .verify(input.session_token.as_deref().unwrap_or_default())?;

        let draft = ScoreDraft::from_session(
            &session,
            &self.roster,
            input.player_name.as_deref().unwrap_or_default(),
            input.message.as_deref().unwrap_or_default(),
        )?;

        let started_at_ms = draft.started_at_ms;
        let ended_at_ms = draft.ended_at_ms;
        let elapsed_ms = draft.elapsed_ms;
        let score = draft.into_score(ScoreId::new(), self.clock.now());

        self.scores.insert(&score).await?;

        tracing::info!(
            score_id = %score.id(),
            player_name = %score.player_name(),
            elapsed_ms,
            "Recorded score"
        );

        Ok(FinishedGame {
            score,
            started_at_ms,
            ended_at_ms,
            elapsed_ms,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FinishGameError {
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
    #[error(transparent)]
    Finalize(#[from] FinalizeError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
