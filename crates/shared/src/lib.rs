//! Waldohunt Protocol - JSON bodies exchanged over HTTP
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, uuid and chrono
//! 2. **No business logic** - Pure data types and serialization
//! 3. **camelCase on the wire** - field names match the browser client
//! 4. **No domain IDs** - use raw `uuid::Uuid` in DTOs

pub mod requests;
pub mod responses;

pub use requests::{FinishGameRequest, GuessRequest, ScoresQuery};
pub use responses::{
    ErrorResponse, FinishGameResponse, GameStartResponse, GuessResponse, ScoreData,
    ScoresResponse, TargetBoxData,
};
