//! SQLite-backed leaderboard storage.

use async_trait::async_trait;
use chrono::DateTime;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;
use waldohunt_domain::{PlayerName, Score, ScoreId, ScoreMessage};

use crate::infrastructure::ports::{RepoError, ScoreRepo};

/// Longest message the table accepts.
pub const MAX_MESSAGE_LENGTH: usize = 280;

/// SQLite implementation of the score table.
pub struct SqliteScoreRepo {
    pool: SqlitePool,
}

impl SqliteScoreRepo {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("scores", e))?;

        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS scores (
                id TEXT PRIMARY KEY NOT NULL,
                player_name TEXT NOT NULL UNIQUE,
                message TEXT NOT NULL CHECK (length(message) <= {MAX_MESSAGE_LENGTH}),
                elapsed_ms INTEGER NOT NULL CHECK (elapsed_ms >= 0),
                created_at_ms INTEGER NOT NULL
            )
            "#
        ))
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("scores", e))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_scores_ranking ON scores (elapsed_ms, created_at_ms)",
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("scores", e))?;

        Ok(Self { pool })
    }
}

fn insert_error(err: sqlx::Error) -> RepoError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return RepoError::constraint("Player name is already taken");
        }
        if db_err.is_check_violation() {
            return RepoError::constraint(format!(
                "Message must be at most {MAX_MESSAGE_LENGTH} characters"
            ));
        }
    }
    RepoError::database("insert_score", err)
}

fn row_to_score(row: &SqliteRow) -> Result<Score, RepoError> {
    let id: String = row.get("id");
    let player_name: String = row.get("player_name");
    let message: String = row.get("message");
    let elapsed_ms: i64 = row.get("elapsed_ms");
    let created_at_ms: i64 = row.get("created_at_ms");

    let id = Uuid::parse_str(&id).map_err(RepoError::serialization)?;
    let player_name = PlayerName::new(player_name).map_err(RepoError::serialization)?;
    let message = ScoreMessage::new(message).map_err(RepoError::serialization)?;
    let created_at = DateTime::from_timestamp_millis(created_at_ms)
        .ok_or_else(|| RepoError::serialization(format!("bad created_at_ms {created_at_ms}")))?;

    Ok(Score::new(
        ScoreId::from_uuid(id),
        player_name,
        message,
        elapsed_ms,
        created_at,
    ))
}

#[async_trait]
impl ScoreRepo for SqliteScoreRepo {
    async fn insert(&self, score: &Score) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO scores (id, player_name, message, elapsed_ms, created_at_ms)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(score.id().to_string())
        .bind(score.player_name().as_str())
        .bind(score.message().as_str())
        .bind(score.elapsed_ms())
        .bind(score.created_at().timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(())
    }

    async fn list_ranked(&self, limit: u32) -> Result<Vec<Score>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT id, player_name, message, elapsed_ms, created_at_ms
            FROM scores
            ORDER BY elapsed_ms ASC, created_at_ms ASC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("list_scores", e))?;

        rows.iter().map(row_to_score).collect()
    }
}
