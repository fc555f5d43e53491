use std::sync::Arc;

use crate::error::Outcome;
use crate::source::PoemSource;

/// One complete generate-poem request/response cycle.
///
/// Delegates to the source configured at construction time; the
/// session's outcome is exactly the source's outcome. This layer
/// exists so the state holder never knows whether it is talking to
/// the mock or the remote source.
pub struct GenerationSession {
    source: Arc<dyn PoemSource>,
}

impl GenerationSession {
    pub fn new(source: Arc<dyn PoemSource>) -> Self {
        Self { source }
    }

    pub async fn run(&self, region_code: &str, keywords: &[String]) -> Outcome {
        tracing::debug!(
            source = self.source.name(),
            region = region_code,
            keywords = keywords.len(),
            "generation started"
        );

        let outcome = self.source.generate(region_code, keywords).await;

        match &outcome {
            Ok(_) => tracing::debug!(source = self.source.name(), "generation succeeded"),
            Err(error) => {
                tracing::warn!(source = self.source.name(), %error, "generation failed")
            }
        }

        outcome
    }
}
