//! Time-windowed shared-secret tokens.
//!
//! A token is the URL-safe base64 encoding of
//! `HMAC-SHA256(secret, interval)` where `interval` is the decimal string of
//! `floor(unix_seconds / interval_secs)`. A token stays valid for the window
//! it was issued in and the following one.

use base64::{Engine as _, engine::general_purpose::URL_SAFE};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::config::TokenConfig;

type HmacSha256 = Hmac<Sha256>;

/// Errors raised while building a [`TimedTokenService`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenConfigError {
    /// The window length must be at least one second.
    #[error("token interval must be greater than zero")]
    ZeroInterval,

    /// The secret cannot key HMAC-SHA256.
    #[error("token secret is not a valid HMAC key")]
    InvalidSecret,
}

/// Issues and verifies timed tokens.
#[derive(Clone)]
pub struct TimedTokenService {
    mac: HmacSha256,
    interval_secs: i64,
}

impl std::fmt::Debug for TimedTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedTokenService")
            .field("secret", &"[hidden]")
            .field("interval_secs", &self.interval_secs)
            .finish()
    }
}

impl TimedTokenService {
    /// Creates a token service from configuration.
    ///
    /// # Errors
    ///
    /// Returns `TokenConfigError::ZeroInterval` if the window is zero seconds,
    /// or `TokenConfigError::InvalidSecret` if the secret cannot key HMAC.
    pub fn new(config: &TokenConfig) -> Result<Self, TokenConfigError> {
        if config.interval_secs == 0 {
            return Err(TokenConfigError::ZeroInterval);
        }

        let mac = HmacSha256::new_from_slice(config.secret.as_bytes())
            .map_err(|_| TokenConfigError::InvalidSecret)?;

        Ok(Self {
            mac,
            interval_secs: i64::try_from(config.interval_secs).unwrap_or(i64::MAX),
        })
    }

    /// Returns the window length in seconds.
    #[must_use]
    pub const fn interval_secs(&self) -> i64 {
        self.interval_secs
    }

    /// Generates the token for the current wall-clock time.
    #[must_use]
    pub fn generate(&self) -> String {
        self.generate_at(now_unix())
    }

    /// Generates the token for the window containing `unix_secs`.
    #[must_use]
    pub fn generate_at(&self, unix_secs: i64) -> String {
        self.token_for_interval(self.interval_of(unix_secs))
    }

    /// Verifies a token against the current wall-clock time.
    #[must_use]
    pub fn verify(&self, token: &str) -> bool {
        self.verify_at(token, now_unix())
    }

    /// Verifies a token against the window containing `unix_secs` and the
    /// window before it.
    #[must_use]
    pub fn verify_at(&self, token: &str, unix_secs: i64) -> bool {
        if token.is_empty() {
            return false;
        }

        let current = self.interval_of(unix_secs);

        // Both candidates are always computed and compared.
        let mut accepted = subtle::Choice::from(0);
        for interval in [current, current - 1] {
            let expected = self.token_for_interval(interval);
            accepted |= expected.as_bytes().ct_eq(token.as_bytes());
        }

        accepted.into()
    }

    fn interval_of(&self, unix_secs: i64) -> i64 {
        unix_secs.div_euclid(self.interval_secs)
    }

    fn token_for_interval(&self, interval: i64) -> String {
        let mut mac = self.mac.clone();
        mac.update(interval.to_string().as_bytes());
        URL_SAFE.encode(mac.finalize().into_bytes())
    }
}

fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}
