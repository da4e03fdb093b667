//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, the
//! environment configuration, and the signed session-token codec.

pub mod clock;
pub mod config;
pub mod ports;
pub mod scores;
pub mod session_token;
