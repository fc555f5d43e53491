//! Poem sources: where generated poems come from.
//!
//! Two implementations share one async contract: a canned mock source
//! (no network, fixed latency) and a remote source backed by a
//! generative-language API. The concrete source is chosen at
//! construction time so the session and state holder never inspect
//! which one they hold.

use async_trait::async_trait;

use crate::error::Outcome;

mod mock;
mod remote;

pub use mock::MockSource;
pub use remote::RemoteSource;

/// A one-shot asynchronous poem generator.
///
/// `generate` may suspend (artificial delay or network round trip) and
/// resolves to exactly one [`Outcome`]. No retries, no streaming.
#[async_trait]
pub trait PoemSource: Send + Sync {
    /// Name of this source for logging.
    fn name(&self) -> &'static str;

    /// Generate one poem for the given region code and keywords.
    async fn generate(&self, region_code: &str, keywords: &[String]) -> Outcome;
}
