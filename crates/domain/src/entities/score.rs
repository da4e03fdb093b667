//! Leaderboard entries.

use chrono::{DateTime, Utc};

use crate::entities::{GameSession, Roster};
use crate::ids::ScoreId;
use crate::value_objects::{PlayerName, ScoreMessage};

/// A persisted leaderboard row. Created once per finished game, never updated.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    id: ScoreId,
    player_name: PlayerName,
    message: ScoreMessage,
    elapsed_ms: i64,
    created_at: DateTime<Utc>,
}

impl Score {
    pub fn new(
        id: ScoreId,
        player_name: PlayerName,
        message: ScoreMessage,
        elapsed_ms: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            player_name,
            message,
            elapsed_ms,
            created_at,
        }
    }

    pub fn id(&self) -> ScoreId {
        self.id
    }

    pub fn player_name(&self) -> &PlayerName {
        &self.player_name
    }

    pub fn message(&self) -> &ScoreMessage {
        &self.message
    }

    pub fn elapsed_ms(&self) -> i64 {
        self.elapsed_ms
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Why a session cannot become a score.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FinalizeError {
    #[error("Game is not complete yet")]
    GameNotComplete,
    #[error("Completed session has no end timestamp")]
    MissingEndTimestamp,
    #[error("{0}")]
    InvalidName(String),
    #[error("{0}")]
    InvalidMessage(String),
}

/// A validated score that has not been assigned an id or creation time yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDraft {
    pub player_name: PlayerName,
    pub message: ScoreMessage,
    pub started_at_ms: i64,
    pub ended_at_ms: i64,
    pub elapsed_ms: i64,
}

impl ScoreDraft {
    /// Check a finished session and the player's submission.
    ///
    /// Checks run in a fixed order: completeness, end timestamp, name, message.
    /// The token signature is not looked at here; callers verify it first.
    pub fn from_session(
        session: &GameSession,
        roster: &Roster,
        player_name: &str,
        message: &str,
    ) -> Result<Self, FinalizeError> {
        if !roster.is_complete(session.found()) {
            return Err(FinalizeError::GameNotComplete);
        }

        let ended_at_ms = session
            .ended_at_ms()
            .ok_or(FinalizeError::MissingEndTimestamp)?;

        let player_name = PlayerName::new(player_name)
            .map_err(|e| FinalizeError::InvalidName(e.reason().to_string()))?;
        let message = ScoreMessage::new(message)
            .map_err(|e| FinalizeError::InvalidMessage(e.reason().to_string()))?;

        Ok(Self {
            player_name,
            message,
            started_at_ms: session.started_at_ms(),
            ended_at_ms,
            elapsed_ms: super::elapsed_between(session.started_at_ms(), ended_at_ms),
        })
    }

    pub fn into_score(self, id: ScoreId, created_at: DateTime<Utc>) -> Score {
        Score::new(id, self.player_name, self.message, self.elapsed_ms, created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::CharacterKey;
    use chrono::TimeZone;

    fn completed(started: i64, ended: i64) -> GameSession {
        let roster = Roster::standard();
        roster
            .keys()
            .cloned()
            .fold(GameSession::start(started), GameSession::with_found)
            .with_completion(ended)
    }

    #[test]
    fn incomplete_session_is_rejected() {
        let roster = Roster::standard();
        let session =
            GameSession::start(0).with_found(CharacterKey::new("waldo").unwrap());

        let err = ScoreDraft::from_session(&session, &roster, "Ann", "gg").unwrap_err();
        assert_eq!(err, FinalizeError::GameNotComplete);
    }

    #[test]
    fn complete_session_without_end_time_is_rejected() {
        let roster = Roster::standard();
        let found = roster.keys().cloned().collect();
        let session = GameSession::restore(0, found, None);

        let err = ScoreDraft::from_session(&session, &roster, "Ann", "gg").unwrap_err();
        assert_eq!(err, FinalizeError::MissingEndTimestamp);
    }

    #[test]
    fn validates_name_then_message() {
        let roster = Roster::standard();
        let session = completed(1_000, 61_000);

        assert!(matches!(
            ScoreDraft::from_session(&session, &roster, "   ", ""),
            Err(FinalizeError::InvalidName(_))
        ));
        assert!(matches!(
            ScoreDraft::from_session(&session, &roster, &"x".repeat(25), "gg"),
            Err(FinalizeError::InvalidName(_))
        ));
        assert!(matches!(
            ScoreDraft::from_session(&session, &roster, "Ann", "  "),
            Err(FinalizeError::InvalidMessage(_))
        ));
    }

    #[test]
    fn computes_elapsed_from_embedded_timestamps() {
        let roster = Roster::standard();
        let session = completed(1_000, 61_000);

        let draft = ScoreDraft::from_session(&session, &roster, " Ann ", " gg ").unwrap();
        assert_eq!(draft.player_name.as_str(), "Ann");
        assert_eq!(draft.message.as_str(), "gg");
        assert_eq!(draft.started_at_ms, 1_000);
        assert_eq!(draft.ended_at_ms, 61_000);
        assert_eq!(draft.elapsed_ms, 60_000);

        let created_at = Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap();
        let id = ScoreId::new();
        let score = draft.into_score(id, created_at);
        assert_eq!(score.id(), id);
        assert_eq!(score.elapsed_ms(), 60_000);
        assert_eq!(score.created_at(), created_at);
    }

    #[test]
    fn clock_anomaly_clamps_to_zero() {
        let roster = Roster::standard();
        let session = completed(90_000, 30_000);

        let draft = ScoreDraft::from_session(&session, &roster, "Ann", "gg").unwrap();
        assert_eq!(draft.elapsed_ms, 0);
    }
}
