//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use waldohunt_domain::{FinalizeError, Score};
use waldohunt_shared::{
    ErrorResponse, FinishGameRequest, FinishGameResponse, GameStartResponse, GuessRequest,
    GuessResponse, ScoreData, ScoresQuery, ScoresResponse, TargetBoxData,
};

use crate::app::App;
use crate::infrastructure::ports::RepoError;
use crate::infrastructure::session_token::TokenError;
use crate::use_cases::game::{
    FinishGameError, FinishGameInput, GuessInput, StartGameError, SubmitGuessError,
};
use crate::use_cases::scores::ListScoresError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/game-start", get(start_game))
        .route("/game-guess", post(submit_guess))
        .route("/game-end", post(finish_game))
        .route("/scores", get(list_scores))
        .fallback(not_found)
}

async fn health() -> &'static str {
    "OK"
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

// =============================================================================
// Game
// =============================================================================

async fn start_game(State(app): State<Arc<App>>) -> Result<Json<GameStartResponse>, ApiError> {
    let started = app.use_cases.game.start.execute()?;

    Ok(Json(GameStartResponse {
        session_token: started.session_token,
        started_at_ms: started.started_at_ms,
        server_now_ms: started.server_now_ms,
        character_names: started.character_names,
        target_box_size: TargetBoxData {
            width: started.target_box.width,
            height: started.target_box.height,
        },
    }))
}

async fn submit_guess(
    State(app): State<Arc<App>>,
    payload: Result<Json<GuessRequest>, JsonRejection>,
) -> Result<Json<GuessResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let coordinates = req.coordinates();
    let result = app.use_cases.game.guess.execute(GuessInput {
        character_name: req.character_name_str().map(str::to_string),
        x: coordinates.map(|(x, _)| x),
        y: coordinates.map(|(_, y)| y),
        session_token: req.session_token,
    })?;

    Ok(Json(GuessResponse {
        is_correct: result.is_correct,
        found: result.found,
        all_found: result.all_found,
        session_token: result.session_token,
    }))
}

async fn finish_game(
    State(app): State<Arc<App>>,
    payload: Result<Json<FinishGameRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FinishGameResponse>), ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let finished = app
        .use_cases
        .game
        .finish
        .execute(FinishGameInput {
            session_token: req.session_token,
            player_name: req.player_name,
            message: req.message,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FinishGameResponse {
            score: score_data(&finished.score),
            started_at_ms: finished.started_at_ms,
            ended_at_ms: finished.ended_at_ms,
            elapsed_ms: finished.elapsed_ms,
        }),
    ))
}

// =============================================================================
// Leaderboard
// =============================================================================

async fn list_scores(
    State(app): State<Arc<App>>,
    query: Result<Query<ScoresQuery>, QueryRejection>,
) -> Result<Json<ScoresResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let scores = app.use_cases.scores.list.execute(query.limit).await?;

    Ok(Json(ScoresResponse {
        scores: scores.iter().map(score_data).collect(),
    }))
}

fn score_data(score: &Score) -> ScoreData {
    ScoreData {
        id: score.id().to_uuid(),
        player_name: score.player_name().to_string(),
        message: score.message().to_string(),
        elapsed_ms: score.elapsed_ms(),
        created_at: score.created_at(),
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Unauthorized(String),
    Conflict {
        message: String,
        found: Option<Vec<String>>,
    },
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, ErrorResponse::new("Not found")),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorResponse::new(msg)),
            ApiError::Conflict { message, found } => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: message,
                    found,
                },
            ),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal error"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<TokenError> for ApiError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Signing(msg) => ApiError::Internal(msg),
            TokenError::Expired => {
                tracing::debug!("Rejected expired session token");
                ApiError::Unauthorized("Session expired. Start a new game.".into())
            }
            other => {
                tracing::debug!(error = %other, "Rejected session token");
                ApiError::Unauthorized("Invalid session token.".into())
            }
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::ConstraintViolation(message) => ApiError::Conflict {
                message,
                found: None,
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<StartGameError> for ApiError {
    fn from(e: StartGameError) -> Self {
        match e {
            StartGameError::Token(e) => e.into(),
        }
    }
}

impl From<SubmitGuessError> for ApiError {
    fn from(e: SubmitGuessError) -> Self {
        match e {
            SubmitGuessError::InvalidCharacter(_) => {
                ApiError::BadRequest("Invalid character name.".into())
            }
            SubmitGuessError::InvalidCoordinates => {
                ApiError::BadRequest("Coordinates must be numbers.".into())
            }
            SubmitGuessError::AlreadyFound { found, .. } => ApiError::Conflict {
                message: "Character already found.".into(),
                found: Some(found),
            },
            SubmitGuessError::Token(e) => e.into(),
        }
    }
}

impl From<FinishGameError> for ApiError {
    fn from(e: FinishGameError) -> Self {
        match e {
            FinishGameError::Token(e) => e.into(),
            FinishGameError::Finalize(e) => {
                tracing::debug!(error = %e, "Rejected score submission");
                match e {
                    FinalizeError::GameNotComplete => {
                        ApiError::BadRequest("Game is not complete yet.".into())
                    }
                    FinalizeError::MissingEndTimestamp => {
                        ApiError::BadRequest("Invalid elapsed time.".into())
                    }
                    FinalizeError::InvalidName(msg) | FinalizeError::InvalidMessage(msg) => {
                        ApiError::BadRequest(msg)
                    }
                }
            }
            FinishGameError::Repo(e) => e.into(),
        }
    }
}

impl From<ListScoresError> for ApiError {
    fn from(e: ListScoresError) -> Self {
        match e {
            ListScoresError::InvalidLimit(_) => ApiError::BadRequest(e.to_string()),
            ListScoresError::Repo(e) => e.into(),
        }
    }
}
