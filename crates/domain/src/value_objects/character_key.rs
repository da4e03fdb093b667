//! Identifier of a hidden character in the scene.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Name of a hidden character, e.g. `waldo`.
///
/// A key only says the string is well formed. Whether the character is
/// actually part of the current scene is a question for the
/// [`Roster`](crate::entities::Roster).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterKey(pub(crate) String);

impl CharacterKey {
    /// # Errors
    ///
    /// Returns `DomainError::Parse` for an empty key or one containing
    /// whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        if key.is_empty() {
            return Err(DomainError::parse("Character key cannot be empty"));
        }
        if key.chars().any(char::is_whitespace) {
            return Err(DomainError::parse(format!(
                "Character key cannot contain whitespace: {:?}",
                key
            )));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterKey {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterKey> for String {
    fn from(key: CharacterKey) -> String {
        key.0
    }
}

impl AsRef<str> for CharacterKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
