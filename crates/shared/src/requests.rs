//! Request bodies
//!
//! Every field is optional on the wire so the engine can report a precise
//! validation error instead of a generic deserialization failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `POST /game-guess`
///
/// `characterName`, `x` and `y` are kept as raw JSON so a value of the wrong
/// type is reported by the engine as a bad character or bad coordinates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    #[serde(default)]
    pub session_token: Option<String>,
    #[serde(default)]
    pub character_name: Option<Value>,
    #[serde(default)]
    pub x: Option<Value>,
    #[serde(default)]
    pub y: Option<Value>,
}

impl GuessRequest {
    /// The character name, if it was sent as a string.
    pub fn character_name_str(&self) -> Option<&str> {
        self.character_name.as_ref().and_then(Value::as_str)
    }

    /// Both coordinates, if both were sent as JSON numbers.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let x = self.x.as_ref().and_then(Value::as_f64)?;
        let y = self.y.as_ref().and_then(Value::as_f64)?;
        Some((x, y))
    }
}

/// `POST /game-end`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishGameRequest {
    #[serde(default)]
    pub session_token: Option<String>,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Query string of `GET /scores`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoresQuery {
    #[serde(default)]
    pub limit: Option<u32>,
}
