//! Configuration loading and credential resolution.

mod credentials;
mod loader;
mod types;

pub use credentials::{resolve_api_key, CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{Config, Defaults, RemoteConfig, SourceKind};
