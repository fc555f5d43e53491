//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_gemini;

use std::time::Duration;

use kawi::generation::{GenerationSession, StateHolder};
use kawi::source::{MockSource, PoemSource};
use std::sync::Arc;

/// Holder backed by a zero-delay mock source.
pub fn mock_holder() -> StateHolder {
    holder_with(Arc::new(MockSource::new(Duration::ZERO)))
}

pub fn holder_with(source: Arc<dyn PoemSource>) -> StateHolder {
    StateHolder::new(GenerationSession::new(source))
}

/// All canned poems for a region with the given keywords substituted,
/// for asserting that an output came from that region's set.
pub fn personalized_set(region_code: &str, keywords: &[&str]) -> Vec<String> {
    MockSource::poems_for(region_code)
        .iter()
        .map(|poem| {
            let mut text = poem.to_string();
            if let Some(first) = keywords.first() {
                text = text.replace("งาม", first);
            }
            if let Some(second) = keywords.get(1) {
                text = text.replace("ใส", second);
            }
            text
        })
        .collect()
}
