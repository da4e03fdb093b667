//! Waldohunt Engine library.
//!
//! Server side of the hidden-character game: signed session tokens, guess
//! checking and the leaderboard.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration (start, guess, finish, scores)
//! - `infrastructure/` - Config, clock, session token codec, SQLite scores, ports
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
