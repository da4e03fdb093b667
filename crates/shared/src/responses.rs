//! Response bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Size of the hit-test window, for drawing the selection box client-side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetBoxData {
    pub width: f64,
    pub height: f64,
}

/// `GET /game-start`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStartResponse {
    pub session_token: String,
    pub started_at_ms: i64,
    /// Server clock at issuance, so the client can run a countdown
    /// without assuming synchronized clocks.
    pub server_now_ms: i64,
    pub character_names: Vec<String>,
    pub target_box_size: TargetBoxData,
}

/// `POST /game-guess`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub is_correct: bool,
    pub found: Vec<String>,
    pub all_found: bool,
    pub session_token: String,
}

/// A leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreData {
    pub id: Uuid,
    pub player_name: String,
    pub message: String,
    pub elapsed_ms: i64,
    pub created_at: DateTime<Utc>,
}

/// `POST /game-end`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishGameResponse {
    pub score: ScoreData,
    pub started_at_ms: i64,
    pub ended_at_ms: i64,
    pub elapsed_ms: i64,
}

/// `GET /scores`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoresResponse {
    pub scores: Vec<ScoreData>,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Current found-set, present when a guess names an already found character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            found: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_response_uses_camel_case() {
        let body = GameStartResponse {
            session_token: "t".into(),
            started_at_ms: 1,
            server_now_ms: 2,
            character_names: vec!["waldo".into()],
            target_box_size: TargetBoxData {
                width: 60.0,
                height: 60.0,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["sessionToken"], "t");
        assert_eq!(json["startedAtMs"], 1);
        assert_eq!(json["serverNowMs"], 2);
        assert_eq!(json["characterNames"][0], "waldo");
        assert_eq!(json["targetBoxSize"]["width"], 60.0);
    }

    #[test]
    fn error_response_omits_absent_found() {
        let json = serde_json::to_value(ErrorResponse::new("nope")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "nope" }));
    }
}
