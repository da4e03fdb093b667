//! Repository port traits for database access.

use async_trait::async_trait;
use waldohunt_domain::Score;

use super::error::RepoError;

// =============================================================================
// Leaderboard Storage
// =============================================================================

/// Append-only store of finished games.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoreRepo: Send + Sync {
    /// Insert a new score. Rows are never updated or deleted.
    async fn insert(&self, score: &Score) -> Result<(), RepoError>;

    /// Fastest scores first, ties broken by earliest submission.
    async fn list_ranked(&self, limit: u32) -> Result<Vec<Score>, RepoError>;
}
