//! Signed, expiring session tokens.
//!
//! All game progress lives in an HS256 JWT held by the client. The server
//! keeps no session table: every request verifies the token it was handed
//! and answers with a freshly signed one.
//!
//! Payload:
//!
//! ```json
//! { "sub": "waldo-game-session", "startedAtMs": 1700000000000,
//!   "found": ["waldo"], "endedAtMs": null, "iat": 1700000000, "exp": 1700001200 }
//! ```
//!
//! `endedAtMs` is always present, `null` until the roster is complete. A
//! payload missing any of these keys is rejected rather than defaulted.
//! Replaying an older valid token is not prevented; it simply resumes the
//! older progress.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::Serialize;
use serde_json::{Map, Value};
use waldohunt_domain::{CharacterKey, GameSession, Roster};

use crate::infrastructure::config::SigningSecret;
use crate::infrastructure::ports::ClockPort;

/// Fixed `sub` claim. Keeps other tokens signed with the same secret out.
pub const SESSION_SUBJECT: &str = "waldo-game-session";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("Session token is required")]
    MissingToken,
    #[error("Session token has expired")]
    Expired,
    #[error("Session token signature is invalid")]
    InvalidSignature,
    #[error("Malformed session token: {0}")]
    Malformed(String),
    #[error("Failed to sign session token: {0}")]
    Signing(String),
}

impl TokenError {
    fn from_jwt(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::InvalidSubject => Self::Malformed("unexpected subject".into()),
            ErrorKind::MissingRequiredClaim(claim) => {
                Self::Malformed(format!("missing {claim} claim"))
            }
            _ => Self::Malformed(err.to_string()),
        }
    }
}

/// A signed token and when it stops being accepted.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Result of [`SessionTokenCodec::start`].
#[derive(Debug, Clone)]
pub struct StartedSession {
    pub session: GameSession,
    pub token: IssuedToken,
    /// Server clock right after signing.
    pub server_now_ms: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionClaims<'a> {
    sub: &'static str,
    started_at_ms: i64,
    found: Vec<&'a str>,
    ended_at_ms: Option<i64>,
    iat: i64,
    exp: i64,
}

/// Encodes and verifies game sessions.
pub struct SessionTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
    roster: Roster,
    clock: Arc<dyn ClockPort>,
}

impl SessionTokenCodec {
    pub fn new(
        secret: &SigningSecret,
        ttl: Duration,
        roster: Roster,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.sub = Some(SESSION_SUBJECT.to_string());
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs: i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX),
            roster,
            clock,
        }
    }

    /// Begin a new session with an empty found-set.
    pub fn start(&self) -> Result<StartedSession, TokenError> {
        let session = GameSession::start(self.clock.now().timestamp_millis());
        let token = self.sign(&session)?;

        Ok(StartedSession {
            session,
            token,
            server_now_ms: self.clock.now().timestamp_millis(),
        })
    }

    /// Verify `token` and rebuild the session it carries.
    ///
    /// The token must be byte-exact; surrounding whitespace is not stripped.
    pub fn verify(&self, token: &str) -> Result<GameSession, TokenError> {
        if token.is_empty() {
            return Err(TokenError::MissingToken);
        }

        let data = decode::<Map<String, Value>>(token, &self.decoding_key, &self.validation)
            .map_err(TokenError::from_jwt)?;

        self.session_from_claims(&data.claims)
    }

    /// Sign the successor of `session`.
    ///
    /// `startedAtMs` is carried over from `session`. An end time already
    /// present on `session` always wins over `ended_at_ms`, so it can never
    /// be cleared or moved.
    pub fn reissue(
        &self,
        session: &GameSession,
        found: BTreeSet<CharacterKey>,
        ended_at_ms: Option<i64>,
    ) -> Result<(GameSession, IssuedToken), TokenError> {
        let next = GameSession::restore(
            session.started_at_ms(),
            found,
            session.ended_at_ms().or(ended_at_ms),
        );
        let token = self.sign(&next)?;
        Ok((next, token))
    }

    fn sign(&self, session: &GameSession) -> Result<IssuedToken, TokenError> {
        let now = self.clock.now();
        let iat = now.timestamp();
        let exp = iat.saturating_add(self.ttl_secs);

        let claims = SessionClaims {
            sub: SESSION_SUBJECT,
            started_at_ms: session.started_at_ms(),
            found: session.found().iter().map(CharacterKey::as_str).collect(),
            ended_at_ms: session.ended_at_ms(),
            iat,
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at: DateTime::from_timestamp(exp, 0).unwrap_or(DateTime::<Utc>::MAX_UTC),
        })
    }

    fn session_from_claims(&self, claims: &Map<String, Value>) -> Result<GameSession, TokenError> {
        let started_at_ms = claims
            .get("startedAtMs")
            .and_then(Value::as_i64)
            .ok_or_else(|| TokenError::Malformed("startedAtMs must be an integer".into()))?;

        let ended_at_ms = match claims.get("endedAtMs") {
            None => return Err(TokenError::Malformed("missing endedAtMs".into())),
            Some(Value::Null) => None,
            Some(value) => Some(value.as_i64().ok_or_else(|| {
                TokenError::Malformed("endedAtMs must be an integer or null".into())
            })?),
        };

        let names = claims
            .get("found")
            .and_then(Value::as_array)
            .ok_or_else(|| TokenError::Malformed("found must be an array".into()))?;

        let mut found = BTreeSet::new();
        for name in names {
            let entry = name
                .as_str()
                .and_then(|n| self.roster.get(n))
                .ok_or_else(|| TokenError::Malformed(format!("unknown character {name}")))?;
            found.insert(entry.key.clone());
        }

        Ok(GameSession::restore(started_at_ms, found, ended_at_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, SystemClock};
    use serde_json::json;

    const SECRET: &str = "test-secret";

    fn codec_with(clock: Arc<dyn ClockPort>) -> SessionTokenCodec {
        SessionTokenCodec::new(
            &SigningSecret::new(SECRET),
            Duration::from_secs(20 * 60),
            Roster::standard(),
            clock,
        )
    }

    fn codec() -> SessionTokenCodec {
        codec_with(Arc::new(SystemClock::new()))
    }

    fn key(name: &str) -> CharacterKey {
        CharacterKey::new(name).unwrap()
    }

    fn sign_raw(claims: Value) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn valid_claims() -> Value {
        let iat = Utc::now().timestamp();
        json!({
            "sub": SESSION_SUBJECT,
            "startedAtMs": 1_700_000_000_000_i64,
            "found": ["waldo"],
            "endedAtMs": null,
            "iat": iat,
            "exp": iat + 600,
        })
    }

    #[test]
    fn start_round_trips() {
        let codec = codec();
        let started = codec.start().unwrap();

        let session = codec.verify(&started.token.token).unwrap();
        assert!(session.found().is_empty());
        assert_eq!(session.ended_at_ms(), None);
        assert_eq!(session.started_at_ms(), started.session.started_at_ms());
        assert!(started.server_now_ms >= started.session.started_at_ms());
    }

    #[test]
    fn token_expires_after_ttl() {
        let codec = codec();
        let started = codec.start().unwrap();
        let lifetime = started.token.expires_at - Utc::now();
        assert!(lifetime <= chrono::Duration::minutes(20));
        assert!(lifetime > chrono::Duration::minutes(19));
    }

    #[test]
    fn reissue_carries_progress() {
        let codec = codec();
        let session = GameSession::start(1_000);
        let found: BTreeSet<_> = [key("waldo"), key("odlaw")].into_iter().collect();

        let (next, token) = codec.reissue(&session, found.clone(), None).unwrap();
        assert_eq!(next.started_at_ms(), 1_000);

        let decoded = codec.verify(&token.token).unwrap();
        assert_eq!(decoded, next);
        assert_eq!(decoded.found(), &found);
    }

    #[test]
    fn reissue_never_moves_end_time() {
        let codec = codec();
        let all: BTreeSet<_> = Roster::standard().keys().cloned().collect();
        let completed = GameSession::restore(1_000, all.clone(), Some(5_000));

        let (next, _) = codec.reissue(&completed, all.clone(), Some(9_000)).unwrap();
        assert_eq!(next.ended_at_ms(), Some(5_000));

        let (next, _) = codec.reissue(&completed, all, None).unwrap();
        assert_eq!(next.ended_at_ms(), Some(5_000));
    }

    #[test]
    fn payload_has_expected_shape() {
        let codec = codec();
        let started = codec.start().unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.sub = Some(SESSION_SUBJECT.to_string());
        let data = decode::<Value>(
            &started.token.token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &validation,
        )
        .unwrap();

        assert_eq!(data.claims["sub"], SESSION_SUBJECT);
        assert_eq!(data.claims["found"], json!([]));
        assert_eq!(data.claims["endedAtMs"], Value::Null);
        assert_eq!(
            data.claims["startedAtMs"].as_i64(),
            Some(started.session.started_at_ms())
        );
    }

    #[test]
    fn missing_token_is_reported() {
        assert_eq!(codec().verify("").unwrap_err(), TokenError::MissingToken);
    }

    #[test]
    fn padded_token_is_not_accepted() {
        let codec = codec();
        let token = codec.start().unwrap().token.token;

        for padded in [format!(" {token} "), format!("{token}\n"), "   ".to_string()] {
            assert!(matches!(
                codec.verify(&padded).unwrap_err(),
                TokenError::Malformed(_) | TokenError::InvalidSignature
            ));
        }
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(
            codec().verify("not-a-token").unwrap_err(),
            TokenError::Malformed(_)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let an_hour_ago = Utc::now() - chrono::Duration::hours(1);
        let old = codec_with(Arc::new(FixedClock(an_hour_ago)));
        let token = old.start().unwrap().token.token;

        assert_eq!(codec().verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn other_secret_fails_signature() {
        let other = SessionTokenCodec::new(
            &SigningSecret::new("someone-else"),
            Duration::from_secs(60),
            Roster::standard(),
            Arc::new(SystemClock::new()),
        );
        let token = other.start().unwrap().token.token;

        assert_eq!(codec().verify(&token).unwrap_err(), TokenError::InvalidSignature);
    }

    #[test]
    fn any_flipped_byte_is_rejected() {
        let codec = codec();
        let (_, issued) = codec
            .reissue(&GameSession::start(1_000), [key("waldo")].into_iter().collect(), None)
            .unwrap();
        let token = issued.token;

        for (i, c) in token.char_indices() {
            if c == '.' {
                continue;
            }
            let replacement = if c == 'A' { 'B' } else { 'A' };
            let mut tampered = token.clone();
            tampered.replace_range(i..i + 1, &replacement.to_string());

            let result = codec.verify(&tampered);
            assert!(
                matches!(
                    result,
                    Err(TokenError::InvalidSignature) | Err(TokenError::Malformed(_))
                ),
                "byte {i} flipped but got {result:?}"
            );
        }
    }

    #[test]
    fn valid_raw_claims_decode() {
        let session = codec().verify(&sign_raw(valid_claims())).unwrap();
        assert_eq!(session.started_at_ms(), 1_700_000_000_000);
        assert!(session.has_found(&key("waldo")));
    }

    #[test]
    fn wrong_subject_is_malformed() {
        let mut claims = valid_claims();
        claims["sub"] = json!("password-reset");
        assert!(matches!(
            codec().verify(&sign_raw(claims)).unwrap_err(),
            TokenError::Malformed(_)
        ));
    }

    #[test]
    fn missing_end_key_is_malformed() {
        let mut claims = valid_claims();
        claims.as_object_mut().unwrap().remove("endedAtMs");
        assert!(matches!(
            codec().verify(&sign_raw(claims)).unwrap_err(),
            TokenError::Malformed(_)
        ));
    }

    #[test]
    fn non_numeric_timestamps_are_malformed() {
        for (field, value) in [
            ("startedAtMs", json!("yesterday")),
            ("startedAtMs", json!(1.5)),
            ("endedAtMs", json!("later")),
        ] {
            let mut claims = valid_claims();
            claims[field] = value;
            assert!(
                matches!(
                    codec().verify(&sign_raw(claims)).unwrap_err(),
                    TokenError::Malformed(_)
                ),
                "{field} should be rejected"
            );
        }

        let mut claims = valid_claims();
        claims.as_object_mut().unwrap().remove("startedAtMs");
        assert!(matches!(
            codec().verify(&sign_raw(claims)).unwrap_err(),
            TokenError::Malformed(_)
        ));
    }

    #[test]
    fn unknown_characters_are_malformed() {
        let mut claims = valid_claims();
        claims["found"] = json!(["waldo", "wenda"]);
        assert!(matches!(
            codec().verify(&sign_raw(claims)).unwrap_err(),
            TokenError::Malformed(_)
        ));

        let mut claims = valid_claims();
        claims["found"] = json!("waldo");
        assert!(matches!(
            codec().verify(&sign_raw(claims)).unwrap_err(),
            TokenError::Malformed(_)
        ));
    }

    #[test]
    fn duplicate_found_entries_collapse() {
        let mut claims = valid_claims();
        claims["found"] = json!(["waldo", "waldo", "odlaw"]);
        let session = codec().verify(&sign_raw(claims)).unwrap();
        assert_eq!(session.found().len(), 2);
    }
}
