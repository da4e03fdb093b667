//! Value objects - Immutable objects defined by their attributes

mod character_key;
mod names;
mod target;

pub use character_key::CharacterKey;
pub use names::{PlayerName, ScoreMessage, MAX_PLAYER_NAME_LENGTH};
pub use target::{Coordinates, TargetBox};
