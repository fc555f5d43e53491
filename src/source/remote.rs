//! Remote poem source backed by a Gemini-style generative-language API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{RemoteConfig, SecureString};
use crate::error::{GenerateError, Outcome};
use crate::prompt::build_prompt;
use crate::source::PoemSource;

/// Single-turn request payload for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Safety-filter feedback attached to empty responses.
#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
    #[serde(rename = "blockReasonMessage")]
    block_reason_message: Option<String>,
}

/// One-shot client for the generative-language endpoint.
///
/// Issues a single POST per generation attempt; a failed attempt is
/// terminal for that user action (no retry).
pub struct RemoteSource {
    client: Client,
    base_url: String,
    model: String,
    api_key: SecureString,
}

impl RemoteSource {
    pub fn new(config: &RemoteConfig, api_key: SecureString) -> Self {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .expect("Failed to build remote client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Pull the first candidate's text out of a parsed response, or
    /// map the block-reason feedback to a failure.
    fn extract_poem(response: GenerateContentResponse) -> Outcome {
        let text = response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.clone())
            .filter(|text| !text.is_empty());

        match text {
            Some(poem) => Ok(poem),
            None => {
                let (reason, message) = match response.prompt_feedback {
                    Some(feedback) => (feedback.block_reason, feedback.block_reason_message),
                    None => (None, None),
                };
                Err(GenerateError::blocked(reason, message))
            }
        }
    }
}

#[async_trait]
impl PoemSource for RemoteSource {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn generate(&self, region_code: &str, keywords: &[String]) -> Outcome {
        let prompt = build_prompt(region_code, keywords);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!(region = region_code, model = %self.model, "sending generation request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "generation request rejected");
            return Err(GenerateError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::InvalidResponse(e.to_string()))?;

        Self::extract_poem(parsed)
    }
}
