//! The hidden characters of a scene and where they are.

use std::collections::BTreeSet;

use crate::error::DomainError;
use crate::value_objects::{CharacterKey, Coordinates, TargetBox};

/// One hidden character and its true location in the image.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub key: CharacterKey,
    pub location: Coordinates,
}

/// Immutable table of hidden characters plus the hit-test window.
///
/// The order of entries is the order characters are presented to players.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    target_box: TargetBox,
}

impl Roster {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an empty roster and
    /// `DomainError::Constraint` if two entries share a key.
    pub fn new(entries: Vec<RosterEntry>, target_box: TargetBox) -> Result<Self, DomainError> {
        if entries.is_empty() {
            return Err(DomainError::validation("Roster must contain at least one character"));
        }

        let mut seen = BTreeSet::new();
        for entry in &entries {
            if !seen.insert(entry.key.as_str()) {
                return Err(DomainError::constraint(format!(
                    "Duplicate character key in roster: {}",
                    entry.key
                )));
            }
        }

        Ok(Self {
            entries,
            target_box,
        })
    }

    /// The scene shipped with the game: waldo, odlaw and wizard in a 60x60 window.
    pub fn standard() -> Self {
        let entry = |key: &str, x: f64, y: f64| RosterEntry {
            key: CharacterKey(key.to_string()),
            location: Coordinates { x, y },
        };

        Self {
            entries: vec![
                entry("waldo", 1585.0, 622.0),
                entry("odlaw", 273.0, 585.0),
                entry("wizard", 695.0, 584.0),
            ],
            target_box: TargetBox::STANDARD,
        }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn target_box(&self) -> TargetBox {
        self.target_box
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CharacterKey> {
        self.entries.iter().map(|e| &e.key)
    }

    /// Look up a character by its raw name.
    pub fn get(&self, name: &str) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.key.as_str() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether `found` covers every character in the roster.
    pub fn is_complete(&self, found: &BTreeSet<CharacterKey>) -> bool {
        self.entries.iter().all(|e| found.contains(&e.key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> CharacterKey {
        CharacterKey::new(name).unwrap()
    }

    #[test]
    fn standard_roster_has_three_characters_in_display_order() {
        let roster = Roster::standard();
        let names: Vec<&str> = roster.keys().map(CharacterKey::as_str).collect();
        assert_eq!(names, ["waldo", "odlaw", "wizard"]);
        assert_eq!(roster.target_box(), TargetBox::STANDARD);

        let waldo = roster.get("waldo").unwrap();
        assert_eq!(waldo.location, Coordinates { x: 1585.0, y: 622.0 });
    }

    #[test]
    fn rejects_empty_and_duplicate_rosters() {
        assert!(matches!(
            Roster::new(vec![], TargetBox::STANDARD),
            Err(DomainError::Validation(_))
        ));

        let dup = vec![
            RosterEntry {
                key: key("a"),
                location: Coordinates { x: 0.0, y: 0.0 },
            },
            RosterEntry {
                key: key("a"),
                location: Coordinates { x: 1.0, y: 1.0 },
            },
        ];
        assert!(matches!(
            Roster::new(dup, TargetBox::STANDARD),
            Err(DomainError::Constraint(_))
        ));
    }

    #[test]
    fn completeness_requires_every_key() {
        let roster = Roster::standard();
        let mut found = BTreeSet::new();
        assert!(!roster.is_complete(&found));

        found.insert(key("waldo"));
        found.insert(key("odlaw"));
        assert!(!roster.is_complete(&found));

        found.insert(key("wizard"));
        assert!(roster.is_complete(&found));
    }

    #[test]
    fn unknown_names_are_not_members() {
        let roster = Roster::standard();
        assert!(roster.contains("wizard"));
        assert!(!roster.contains("wenda"));
        assert!(!roster.contains("Waldo"));
    }
}
