//! Call-log heuristic classifier
//!
//! Ordered decision table over the caller-known flag and call duration.
//! The thresholds and scores are heuristic constants with no derivation
//! from real fraud-call data yet, so they live in a config struct rather
//! than hard-coded literals.

use serde::{Deserialize, Serialize};
use truthshield_core::{CallAssessment, CallRecord};

/// Suffix appended to every heuristic explanation so callers and tests can
/// distinguish locally produced verdicts from remote ones
pub const OFFLINE_SUFFIX: &str = "(Chế độ Offline)";

/// Tunable thresholds and scores for the call heuristic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallHeuristicConfig {
    /// Score for a call with a resolved contact name
    #[serde(default = "default_known_contact_score")]
    pub known_contact_score: u8,

    /// Score for a very short call from an unknown number (ping/spam pattern)
    #[serde(default = "default_ping_call_score")]
    pub ping_call_score: u8,

    /// Score for an unusually long call from an unknown number
    /// (sustained social-engineering pattern)
    #[serde(default = "default_long_call_score")]
    pub long_call_score: u8,

    /// Score for any other call from an unknown number
    #[serde(default = "default_unverified_score")]
    pub unverified_score: u8,

    /// Calls shorter than this are treated as ping calls (seconds)
    #[serde(default = "default_short_call_secs")]
    pub short_call_secs: u64,

    /// Calls at least this long are treated as sustained calls (seconds)
    #[serde(default = "default_long_call_secs")]
    pub long_call_secs: u64,
}

impl Default for CallHeuristicConfig {
    fn default() -> Self {
        Self {
            known_contact_score: default_known_contact_score(),
            ping_call_score: default_ping_call_score(),
            long_call_score: default_long_call_score(),
            unverified_score: default_unverified_score(),
            short_call_secs: default_short_call_secs(),
            long_call_secs: default_long_call_secs(),
        }
    }
}

fn default_known_contact_score() -> u8 {
    5
}

fn default_ping_call_score() -> u8 {
    75
}

fn default_long_call_score() -> u8 {
    65
}

fn default_unverified_score() -> u8 {
    40
}

fn default_short_call_secs() -> u64 {
    10
}

fn default_long_call_secs() -> u64 {
    300
}

/// Decision-table fallback classifier for call records
pub struct CallHeuristic {
    config: CallHeuristicConfig,
}

impl CallHeuristic {
    /// Create a heuristic with the default table
    pub fn new() -> Self {
        Self::with_config(CallHeuristicConfig::default())
    }

    /// Create a heuristic with custom thresholds and scores
    pub fn with_config(config: CallHeuristicConfig) -> Self {
        Self { config }
    }

    /// Score a call record.
    ///
    /// Synchronous, total, deterministic. Rules are evaluated in order:
    /// known contact, then ping call, then sustained call, then the
    /// moderate default.
    pub fn classify(&self, record: &CallRecord) -> CallAssessment {
        let c = &self.config;

        let (score, reason) = if record.is_known_contact() {
            (c.known_contact_score, "Cuộc gọi từ người quen trong danh bạ")
        } else if record.duration_secs < c.short_call_secs {
            (
                c.ping_call_score,
                "Cuộc gọi rất ngắn từ số lạ, có thể là cuộc gọi mồi hoặc spam",
            )
        } else if record.duration_secs >= c.long_call_secs {
            (
                c.long_call_score,
                "Số lạ gọi bất thường lâu, cảnh giác kịch bản lừa đảo kéo dài",
            )
        } else {
            (c.unverified_score, "Số lạ, nên xác minh lại trước khi tin")
        };

        CallAssessment::fallback(score, format!("{reason} {OFFLINE_SUFFIX}"))
    }
}

impl Default for CallHeuristic {
    fn default() -> Self {
        Self::new()
    }
}
