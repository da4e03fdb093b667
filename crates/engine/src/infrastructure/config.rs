//! Environment configuration.
//!
//! Everything the server needs from the environment is read once at startup
//! into [`AppConfig`]. Components receive their values explicitly; nothing
//! reads the environment afterwards.

use std::fmt;
use std::time::Duration;

/// Default session token lifetime: 20 minutes.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(20 * 60);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not configured")]
    Missing(&'static str),
    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// HMAC secret for session tokens. Never printed.
#[derive(Clone)]
pub struct SigningSecret(String);

impl SigningSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub database_path: String,
    pub jwt_secret: SigningSecret,
    pub session_ttl: Duration,
    /// `*` or a comma-separated origin list. `None` disables CORS.
    pub cors_allowed_origins: Option<String>,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let jwt_secret = var("JWT_SECRET")
            .map(SigningSecret::new)
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let server_host = var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into());

        let server_port = match var("SERVER_PORT").or_else(|| var("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "SERVER_PORT",
                reason: e.to_string(),
            })?,
            None => 5000,
        };

        let database_path = var("DATABASE_PATH").unwrap_or_else(|| "waldohunt.db".into());

        let session_ttl = match var("SESSION_TTL_SECONDS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    key: "SESSION_TTL_SECONDS",
                    reason: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        key: "SESSION_TTL_SECONDS",
                        reason: "must be greater than zero".into(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_SESSION_TTL,
        };

        Ok(Self {
            server_host,
            server_port,
            database_path,
            jwt_secret,
            session_ttl,
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
        })
    }
}
