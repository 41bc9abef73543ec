//! Risk engine orchestration
//!
//! Both assess operations follow the same resolution path: sanitize, call
//! the remote classifier under a deadline, and on failure resolve through
//! a local path. A deadline breach is a distinct failure mode with its own
//! softer wording: a slow network must not read as "this message is
//! dangerous", only as "we could not verify in time". Every other failure,
//! including a missing credential, resolves through the deterministic
//! fallback classifiers. No path rejects to the caller.

use crate::client::{GeminiClient, TextGenerator};
use crate::{parse, prompt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use truthshield_classifiers::{CallHeuristic, CallHeuristicConfig, KeywordFallback};
use truthshield_core::{sanitize, CallAssessment, CallRecord, Error, MessageAssessment, Result, Verdict};

/// Wording for a message assessment that hit the deadline.
///
/// Softer than the offline keyword wording on purpose.
pub const MESSAGE_TIMEOUT_WORDING: &str =
    "Mạng chậm. Hệ thống chưa thể xác minh kỹ, hãy gọi điện lại cho người gửi.";

/// Wording for a call assessment that hit the deadline
pub const CALL_TIMEOUT_WORDING: &str =
    "Mạng chậm. Chưa thể phân tích cuộc gọi, hãy gọi lại số quen thuộc để xác minh.";

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// API credential; falls back to the `GEMINI_API_KEY` environment
    /// variable when absent. Absence routes every request to the offline
    /// fallback, it is never a startup error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model name for the remote classifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Deadline for the message path (milliseconds)
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u64,

    /// Deadline for the call path (milliseconds)
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: u64,

    /// Score reported for a call assessment that hit the deadline. The
    /// spec fixes only the wording for timeouts, not the score; a moderate
    /// default keeps timeout results out of the danger band.
    #[serde(default = "default_timeout_score")]
    pub timeout_score: u8,

    /// Call heuristic thresholds and scores
    #[serde(default)]
    pub heuristic: CallHeuristicConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            message_timeout_ms: default_message_timeout_ms(),
            call_timeout_ms: default_call_timeout_ms(),
            timeout_score: default_timeout_score(),
            heuristic: CallHeuristicConfig::default(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_message_timeout_ms() -> u64 {
    8_000
}

fn default_call_timeout_ms() -> u64 {
    5_000
}

fn default_timeout_score() -> u8 {
    30
}

/// Hybrid risk-classification engine
pub struct RiskEngine {
    generator: Option<Arc<dyn TextGenerator>>,
    keywords: KeywordFallback,
    heuristic: CallHeuristic,
    config: EngineConfig,
}

impl RiskEngine {
    /// Create an engine, building a Gemini client from the configured
    /// credential or the environment. Without a credential the engine runs
    /// fully offline.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let generator: Option<Arc<dyn TextGenerator>> = match &config.api_key {
            Some(key) if !key.trim().is_empty() => {
                Some(Arc::new(GeminiClient::new(key.clone()).with_model(config.model.clone())))
            }
            _ => GeminiClient::from_env()
                .map(|client| Arc::new(client.with_model(config.model.clone())) as Arc<dyn TextGenerator>),
        };

        if generator.is_none() {
            warn!("no generative API credential configured, running in offline fallback mode");
        }

        Self::build(config, generator)
    }

    /// Create an engine with an injected generator (used by tests and by
    /// callers substituting another backend)
    pub fn with_generator(config: EngineConfig, generator: Arc<dyn TextGenerator>) -> Result<Self> {
        Self::build(config, Some(generator))
    }

    /// Create an engine with no remote path at all
    pub fn offline(config: EngineConfig) -> Result<Self> {
        Self::build(config, None)
    }

    fn build(config: EngineConfig, generator: Option<Arc<dyn TextGenerator>>) -> Result<Self> {
        Ok(Self {
            generator,
            keywords: KeywordFallback::new()?,
            heuristic: CallHeuristic::with_config(config.heuristic.clone()),
            config,
        })
    }

    /// Whether a remote generator is configured
    pub fn has_remote(&self) -> bool {
        self.generator.is_some()
    }

    /// Analyze pasted message text for scam indicators.
    ///
    /// Infallible: always resolves to an assessment with a non-empty
    /// explanation. The raw text is sanitized exactly once, before it
    /// reaches the prompt or the keyword matcher.
    pub async fn assess_message(&self, raw_text: &str) -> MessageAssessment {
        let clean = sanitize(raw_text);

        match self.remote_message(&clean).await {
            Ok(assessment) => {
                debug!(verdict = assessment.verdict.label(), "remote message assessment");
                assessment
            }
            Err(Error::Timeout) => {
                warn!("remote classification timed out, returning soft verdict");
                MessageAssessment::fallback(Verdict::Suspicious, MESSAGE_TIMEOUT_WORDING)
            }
            Err(error) => {
                warn!(%error, "remote classification failed, using keyword fallback");
                self.keywords.classify(&clean)
            }
        }
    }

    /// Score a call-log entry.
    ///
    /// Infallible, same resolution path as [`Self::assess_message`] with
    /// the call heuristic as the fallback.
    pub async fn assess_call(&self, record: &CallRecord) -> CallAssessment {
        match self.remote_call(record).await {
            Ok(assessment) => {
                debug!(score = assessment.risk_score, "remote call assessment");
                assessment
            }
            Err(Error::Timeout) => {
                warn!("remote call scoring timed out, returning soft score");
                CallAssessment::fallback(self.config.timeout_score, CALL_TIMEOUT_WORDING)
            }
            Err(error) => {
                warn!(%error, "remote call scoring failed, using heuristic fallback");
                self.heuristic.classify(record)
            }
        }
    }

    async fn remote_message(&self, sanitized_text: &str) -> Result<MessageAssessment> {
        let generator = self.require_generator()?;
        let prompt = prompt::message_prompt(sanitized_text);
        let deadline = Duration::from_millis(self.config.message_timeout_ms);

        let response = tokio::time::timeout(deadline, generator.generate(&prompt))
            .await
            .map_err(|_| Error::Timeout)??;

        Ok(parse::parse_message_response(&response))
    }

    async fn remote_call(&self, record: &CallRecord) -> Result<CallAssessment> {
        let generator = self.require_generator()?;
        let prompt = prompt::call_prompt(record);
        let deadline = Duration::from_millis(self.config.call_timeout_ms);

        let response = tokio::time::timeout(deadline, generator.generate(&prompt))
            .await
            .map_err(|_| Error::Timeout)??;

        Ok(parse::parse_call_response(&response))
    }

    fn require_generator(&self) -> Result<&Arc<dyn TextGenerator>> {
        self.generator
            .as_ref()
            .ok_or_else(|| Error::config("no generative API credential configured"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();

        assert_eq!(config.message_timeout_ms, 8_000);
        assert_eq!(config.call_timeout_ms, 5_000);
        assert_eq!(config.timeout_score, 30);
        assert_eq!(config.heuristic.ping_call_score, 75);
    }

    #[tokio::test]
    async fn test_offline_engine_uses_fallback() {
        let engine = RiskEngine::offline(EngineConfig::default()).unwrap();
        assert!(!engine.has_remote());

        let assessment = engine.assess_message("mã OTP của bạn là 123456").await;
        assert_eq!(assessment.verdict, Verdict::Suspicious);
        assert_eq!(assessment.source, truthshield_core::RiskSource::Fallback);
    }
}
