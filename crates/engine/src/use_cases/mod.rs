//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate the session codec, the guess evaluator and the
//! score store to fulfill user stories.

pub mod game;
pub mod scores;

// Re-export main types
pub use game::GameUseCases;
pub use scores::ScoreUseCases;
