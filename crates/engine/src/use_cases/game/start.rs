use std::sync::Arc;

use waldohunt_domain::{Roster, TargetBox};

use crate::infrastructure::session_token::{SessionTokenCodec, TokenError};

/// Everything the client needs to begin playing.
#[derive(Debug, Clone)]
pub struct StartedGame {
    pub session_token: String,
    pub started_at_ms: i64,
    pub server_now_ms: i64,
    pub character_names: Vec<String>,
    pub target_box: TargetBox,
}

/// Use case for minting a fresh session.
pub struct StartGame {
    codec: Arc<SessionTokenCodec>,
    roster: Arc<Roster>,
}

impl StartGame {
    pub fn new(codec: Arc<SessionTokenCodec>, roster: Arc<Roster>) -> Self {
        Self { codec, roster }
    }

    pub fn execute(&self) -> Result<StartedGame, StartGameError> {
        let started = self.codec.start()?;

        tracing::debug!(
            started_at_ms = started.session.started_at_ms(),
            expires_at = %started.token.expires_at,
            "Started game session"
        );

        Ok(StartedGame {
            session_token: started.token.token,
            started_at_ms: started.session.started_at_ms(),
            server_now_ms: started.server_now_ms,
            character_names: self.roster.keys().map(|k| k.to_string()).collect(),
            target_box: self.roster.target_box(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartGameError {
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}
