use std::sync::Arc;

use async_trait::async_trait;
use kawi::error::{GenerateError, Outcome};
use kawi::generation::GenerationSession;
use kawi::source::PoemSource;

/// Source that returns a fixed outcome, for checking pass-through.
struct FixedSource {
    poem: Option<String>,
}

#[async_trait]
impl PoemSource for FixedSource {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn generate(&self, _region_code: &str, _keywords: &[String]) -> Outcome {
        match &self.poem {
            Some(poem) => Ok(poem.clone()),
            None => Err(GenerateError::Internal("stub failure".to_string())),
        }
    }
}

#[tokio::test]
async fn session_passes_success_through_unchanged() {
    let session = GenerationSession::new(Arc::new(FixedSource {
        poem: Some("บทกวี".to_string()),
    }));

    let outcome = session.run("north", &[]).await;
    assert_eq!(outcome.unwrap(), "บทกวี");
}

#[tokio::test]
async fn session_passes_failure_through_unchanged() {
    let session = GenerationSession::new(Arc::new(FixedSource { poem: None }));

    let outcome = session.run("north", &[]).await;
    assert!(outcome.unwrap_err().to_string().contains("stub failure"));
}
