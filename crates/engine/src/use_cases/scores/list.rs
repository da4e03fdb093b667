use std::sync::Arc;

use waldohunt_domain::Score;

use crate::infrastructure::ports::{RepoError, ScoreRepo};

pub const DEFAULT_SCORE_LIMIT: u32 = 100;
pub const MAX_SCORE_LIMIT: u32 = 100;

/// Use case for reading the ranked leaderboard.
pub struct ListScores {
    scores: Arc<dyn ScoreRepo>,
}

impl ListScores {
    pub fn new(scores: Arc<dyn ScoreRepo>) -> Self {
        Self { scores }
    }

    /// Fastest first. `limit` defaults to [`DEFAULT_SCORE_LIMIT`].
    pub async fn execute(&self, limit: Option<u32>) -> Result<Vec<Score>, ListScoresError> {
        let limit = limit.unwrap_or(DEFAULT_SCORE_LIMIT);
        if !(1..=MAX_SCORE_LIMIT).contains(&limit) {
            return Err(ListScoresError::InvalidLimit(limit));
        }

        Ok(self.scores.list_ranked(limit).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListScoresError {
    #[error("limit must be between 1 and {MAX_SCORE_LIMIT}, got {0}")]
    InvalidLimit(u32),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockScoreRepo;

    #[tokio::test]
    async fn defaults_to_hundred() {
        let mut repo = MockScoreRepo::new();
        repo.expect_list_ranked()
            .withf(|limit| *limit == 100)
            .times(1)
            .returning(|_| Ok(vec![]));

        let scores = ListScores::new(Arc::new(repo)).execute(None).await.unwrap();
        assert!(scores.is_empty());
    }

    #[tokio::test]
    async fn passes_explicit_limit_through() {
        let mut repo = MockScoreRepo::new();
        repo.expect_list_ranked()
            .withf(|limit| *limit == 5)
            .times(1)
            .returning(|_| Ok(vec![]));

        ListScores::new(Arc::new(repo)).execute(Some(5)).await.unwrap();
    }

    #[tokio::test]
    async fn out_of_range_limit_is_rejected() {
        let mut repo = MockScoreRepo::new();
        repo.expect_list_ranked().never();
        let use_case = ListScores::new(Arc::new(repo));

        for limit in [0, 101] {
            let err = use_case.execute(Some(limit)).await.unwrap_err();
            assert!(matches!(err, ListScoresError::InvalidLimit(l) if l == limit));
        }
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let mut repo = MockScoreRepo::new();
        repo.expect_list_ranked()
            .returning(|_| Err(RepoError::database("list_ranked", "disk I/O error")));

        let err = ListScores::new(Arc::new(repo)).execute(None).await.unwrap_err();
        assert!(matches!(err, ListScoresError::Repo(_)));
    }
}
