//! Leaderboard use cases.

use std::sync::Arc;

mod list;

pub use list::{ListScores, ListScoresError, DEFAULT_SCORE_LIMIT, MAX_SCORE_LIMIT};

/// Container for leaderboard use cases.
pub struct ScoreUseCases {
    pub list: Arc<ListScores>,
}

impl ScoreUseCases {
    pub fn new(list: Arc<ListScores>) -> Self {
        Self { list }
    }
}
