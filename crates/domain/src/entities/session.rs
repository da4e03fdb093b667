//! Game progress carried by the client between requests.

use std::collections::BTreeSet;

use crate::value_objects::CharacterKey;

/// Progress of a single play-through.
///
/// A session has no identity and is never stored by the server. It is
/// rebuilt from a verified token on every request and written back into a
/// fresh token afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    started_at_ms: i64,
    found: BTreeSet<CharacterKey>,
    ended_at_ms: Option<i64>,
}

impl GameSession {
    /// A new session with nothing found yet.
    pub fn start(now_ms: i64) -> Self {
        Self {
            started_at_ms: now_ms,
            found: BTreeSet::new(),
            ended_at_ms: None,
        }
    }

    /// Rebuild a session from already-validated token contents.
    pub fn restore(
        started_at_ms: i64,
        found: BTreeSet<CharacterKey>,
        ended_at_ms: Option<i64>,
    ) -> Self {
        Self {
            started_at_ms,
            found,
            ended_at_ms,
        }
    }

    pub fn started_at_ms(&self) -> i64 {
        self.started_at_ms
    }

    pub fn found(&self) -> &BTreeSet<CharacterKey> {
        &self.found
    }

    pub fn ended_at_ms(&self) -> Option<i64> {
        self.ended_at_ms
    }

    pub fn has_found(&self, key: &CharacterKey) -> bool {
        self.found.contains(key)
    }

    /// Add `key` to the found-set. Adding a key twice is a no-op.
    pub fn with_found(mut self, key: CharacterKey) -> Self {
        self.found.insert(key);
        self
    }

    /// Stamp the end time unless one is already present.
    ///
    /// The first completion time wins; later calls never move it.
    pub fn with_completion(mut self, now_ms: i64) -> Self {
        if self.ended_at_ms.is_none() {
            self.ended_at_ms = Some(now_ms);
        }
        self
    }

    /// Elapsed play time, once the session has an end time.
    pub fn elapsed_ms(&self) -> Option<i64> {
        self.ended_at_ms
            .map(|ended| elapsed_between(self.started_at_ms, ended))
    }
}

/// Milliseconds between two instants, clamped at zero for clock anomalies.
pub fn elapsed_between(started_at_ms: i64, ended_at_ms: i64) -> i64 {
    ended_at_ms.saturating_sub(started_at_ms).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> CharacterKey {
        CharacterKey::new(name).unwrap()
    }

    #[test]
    fn start_is_empty_and_open() {
        let session = GameSession::start(1_000);
        assert_eq!(session.started_at_ms(), 1_000);
        assert!(session.found().is_empty());
        assert_eq!(session.ended_at_ms(), None);
        assert_eq!(session.elapsed_ms(), None);
    }

    #[test]
    fn found_set_deduplicates() {
        let session = GameSession::start(0)
            .with_found(key("waldo"))
            .with_found(key("waldo"));
        assert_eq!(session.found().len(), 1);
        assert!(session.has_found(&key("waldo")));
    }

    #[test]
    fn completion_time_is_set_once() {
        let session = GameSession::start(100).with_completion(500);
        assert_eq!(session.ended_at_ms(), Some(500));

        let session = session.with_completion(900);
        assert_eq!(session.ended_at_ms(), Some(500));
        assert_eq!(session.elapsed_ms(), Some(400));
    }

    #[test]
    fn elapsed_never_negative() {
        assert_eq!(elapsed_between(2_000, 1_000), 0);
        assert_eq!(elapsed_between(1_000, 1_000), 0);
        assert_eq!(elapsed_between(1_000, 4_500), 3_500);
        assert_eq!(elapsed_between(i64::MIN, i64::MAX), i64::MAX);

        let session = GameSession::restore(5_000, BTreeSet::new(), Some(10));
        assert_eq!(session.elapsed_ms(), Some(0));
    }
}
