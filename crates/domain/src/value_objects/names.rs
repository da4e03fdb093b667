//! Validated text newtypes for leaderboard entries
//!
//! These newtypes ensure that submitted text is valid by construction:
//! - Trimmed of leading/trailing whitespace
//! - Non-empty after trimming
//! - Player names within the display length limit

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum number of characters in a leaderboard display name.
pub const MAX_PLAYER_NAME_LENGTH: usize = 24;

// ============================================================================
// PlayerName
// ============================================================================

/// A validated player display name (non-empty, <=24 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new validated player name.
    ///
    /// Length is counted in Unicode scalar values, not bytes, so a name of
    /// 24 accented letters is accepted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 24 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Player name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_PLAYER_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Player name must be between 1 and {} characters",
                MAX_PLAYER_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> String {
        name.0
    }
}

// ============================================================================
// ScoreMessage
// ============================================================================

/// A freeform message left alongside a score (non-empty, trimmed).
///
/// The upper length bound belongs to the score store, which rejects
/// oversized messages with a constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScoreMessage(String);

impl ScoreMessage {
    /// Create a new validated score message.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the message is empty after trimming.
    pub fn new(message: impl Into<String>) -> Result<Self, DomainError> {
        let message = message.into();
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Message cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScoreMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ScoreMessage {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ScoreMessage> for String {
    fn from(message: ScoreMessage) -> String {
        message.0
    }
}
