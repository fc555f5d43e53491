//! Error types for poem generation.

use thiserror::Error;

/// The result of one generation attempt: a poem, or a failure whose
/// `Display` is the human-readable message surfaced to the user.
pub type Outcome = Result<String, GenerateError>;

/// Errors that can occur while generating a poem.
///
/// All variants collapse to a descriptive string at the presentation
/// boundary; the state holder does not distinguish them beyond that.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The model returned no usable text. `reason` and `message` carry
    /// the provider's block-reason fields, with "unknown" substituted
    /// for absent fields.
    #[error("Generation blocked: {reason} - {message}")]
    Blocked { reason: String, message: String },

    /// Transport-level failure talking to the remote endpoint.
    #[error("Request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success HTTP status.
    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Anything uncategorized.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GenerateError {
    /// Build the blocked variant from optional provider fields.
    pub fn blocked(reason: Option<String>, message: Option<String>) -> Self {
        GenerateError::Blocked {
            reason: reason.unwrap_or_else(|| "unknown".to_string()),
            message: message.unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
