//! API key resolution.
//!
//! Keys are taken from the config file first, then from the
//! environment, and are wrapped so they cannot leak through logs.

use crate::config::types::RemoteConfig;

/// Environment variable consulted when the config carries no key.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when sending requests.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value. Use only when building the API request.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution for the remote source.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// A key was found.
    Configured(SecureString),
    /// No usable key in config or environment.
    Unconfigured { reason: String },
}

/// Resolve the API key for the remote source.
///
/// Order: `remote.api_key` in the config file, then the
/// `GEMINI_API_KEY` environment variable. Empty values count as
/// missing.
pub fn resolve_api_key(remote: &RemoteConfig) -> CredentialStatus {
    if let Some(key) = remote.api_key.as_deref() {
        if !key.is_empty() {
            return CredentialStatus::Configured(SecureString::new(key.to_string()));
        }
    }

    match std::env::var(API_KEY_ENV_VAR) {
        Ok(key) if !key.is_empty() => CredentialStatus::Configured(SecureString::new(key)),
        _ => CredentialStatus::Unconfigured {
            reason: format!(
                "Set remote.api_key in the config file or the {} environment variable",
                API_KEY_ENV_VAR
            ),
        },
    }
}
