//! Remote text-generation clients
//!
//! The engine treats the generative endpoint as an opaque dependency: one
//! prompt in, one non-streaming text response out. Anything with those
//! semantics can implement [`TextGenerator`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use truthshield_core::{Error, Result};

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Seam for the outbound generative-language call
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt and await a single non-streaming text response
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Client name for logs
    fn name(&self) -> &str;
}

/// Client for the Gemini `generateContent` REST endpoint
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client with the default endpoint and model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (used to point tests at a local server)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Build a client from the `GEMINI_API_KEY` environment variable.
    ///
    /// Returns `None` when the credential is absent or empty. A missing
    /// credential is a handled condition that routes to the fallback
    /// classifier, never a startup failure.
    pub fn from_env() -> Option<Self> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(Self::new)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let body = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
        };

        debug!(model = %self.model, "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::remote(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::remote(format!("API returned status {status}")));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::remote(format!("malformed response body: {e}")))?;

        parsed
            .first_text()
            .ok_or_else(|| Error::remote("response contained no candidate text"))
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

// =============================================================================
// Gemini wire structures
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

impl Content {
    fn user(text: &str) -> Self {
        Self {
            role: "user",
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Extract the first candidate's text. Missing candidates, content, or
    /// parts are explicit `None` branches rather than panics.
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|part| part.text)
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_candidate_text() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"SAFE | Tin nhắn bình thường."}],"role":"model"},"finishReason":"STOP"}]}"#;

        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.first_text().as_deref(),
            Some("SAFE | Tin nhắn bình thường.")
        );
    }

    #[test]
    fn test_parse_empty_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(parsed.first_text().is_none());

        let parsed: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(parsed.first_text().is_none());
    }

    #[test]
    fn test_parse_blank_text_rejected() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#;

        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.first_text().is_none());
    }

    #[test]
    fn test_from_env_requires_key() {
        // Only checks the empty-string filter; the variable itself is not
        // set in the test environment.
        std::env::remove_var(API_KEY_ENV);
        assert!(GeminiClient::from_env().is_none());
    }
}
