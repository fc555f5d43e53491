use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Default settings for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Which poem source to use: "mock" or "remote".
    #[serde(default = "default_source")]
    pub source: String,
    /// Artificial latency of the mock source in milliseconds.
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
    /// Maximum number of poems kept in history.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

/// Remote generative-language endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the API (scheme + host).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier used in the request path.
    #[serde(default = "default_model")]
    pub model: String,
    /// API key; falls back to the GEMINI_API_KEY env var when absent.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

fn default_source() -> String {
    "mock".to_string()
}

fn default_mock_delay_ms() -> u64 {
    2000
}

fn default_history_limit() -> usize {
    10
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            source: default_source(),
            mock_delay_ms: default_mock_delay_ms(),
            history_limit: default_history_limit(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl RemoteConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

/// Which poem source implementation to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Mock,
    Remote,
}

impl SourceKind {
    /// Parse a source name. Returns `None` for unknown names so the
    /// caller can report them; config validation rejects them upfront.
    pub fn parse(name: &str) -> Option<SourceKind> {
        match name {
            "mock" => Some(SourceKind::Mock),
            "remote" => Some(SourceKind::Remote),
            _ => None,
        }
    }
}
