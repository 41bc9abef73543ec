//! Core types for TruthShield risk assessments

use serde::{Deserialize, Serialize};

/// Three-level severity verdict for an analyzed message.
///
/// Ordered by severity: `Safe < Suspicious < Scam`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Normal conversation, no fraud signals
    Safe,
    /// Unusual requests or urgency, verification recommended
    Suspicious,
    /// Clear signs of fraud
    Scam,
}

impl Verdict {
    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Suspicious => "suspicious",
            Self::Scam => "scam",
        }
    }
}

/// Which path produced an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSource {
    /// The remote generative classifier
    Remote,
    /// The deterministic local fallback
    Fallback,
}

/// Direction of a logged phone call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Incoming,
    Outgoing,
}

/// A call-log entry submitted for risk analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRecord {
    /// Caller or callee number
    pub phone_number: String,

    /// Resolved contact name, if the number is in the address book.
    /// Presence is a strong safety signal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,

    /// Call duration in seconds
    pub duration_secs: u64,

    /// Incoming or outgoing
    pub direction: CallDirection,
}

impl CallRecord {
    /// Create a record for an incoming call from an unknown number
    pub fn unknown_incoming(phone_number: impl Into<String>, duration_secs: u64) -> Self {
        Self {
            phone_number: phone_number.into(),
            contact_name: None,
            duration_secs,
            direction: CallDirection::Incoming,
        }
    }

    /// Whether the caller resolves to a known contact
    pub fn is_known_contact(&self) -> bool {
        self.contact_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }
}

/// Result of message risk analysis.
///
/// Always fully formed: `explanation` is non-empty on every path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageAssessment {
    /// Severity verdict
    pub verdict: Verdict,

    /// Short explanation worded for a non-technical, elderly reader
    pub explanation: String,

    /// Which path produced this assessment
    pub source: RiskSource,
}

impl MessageAssessment {
    /// Create a new assessment
    pub fn new(verdict: Verdict, explanation: impl Into<String>, source: RiskSource) -> Self {
        Self {
            verdict,
            explanation: explanation.into(),
            source,
        }
    }

    /// Create a remote-sourced assessment
    pub fn remote(verdict: Verdict, explanation: impl Into<String>) -> Self {
        Self::new(verdict, explanation, RiskSource::Remote)
    }

    /// Create a fallback-sourced assessment
    pub fn fallback(verdict: Verdict, explanation: impl Into<String>) -> Self {
        Self::new(verdict, explanation, RiskSource::Fallback)
    }
}

/// Result of call risk analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallAssessment {
    /// Risk score, 0 (harmless) to 100 (dangerous)
    pub risk_score: u8,

    /// Short explanation worded for a non-technical, elderly reader
    pub explanation: String,

    /// Which path produced this assessment
    pub source: RiskSource,
}

impl CallAssessment {
    /// Create a new assessment, clamping the score into 0..=100
    pub fn new(risk_score: u8, explanation: impl Into<String>, source: RiskSource) -> Self {
        Self {
            risk_score: risk_score.min(100),
            explanation: explanation.into(),
            source,
        }
    }

    /// Create a remote-sourced assessment
    pub fn remote(risk_score: u8, explanation: impl Into<String>) -> Self {
        Self::new(risk_score, explanation, RiskSource::Remote)
    }

    /// Create a fallback-sourced assessment
    pub fn fallback(risk_score: u8, explanation: impl Into<String>) -> Self {
        Self::new(risk_score, explanation, RiskSource::Fallback)
    }

    /// Coarse severity band for display purposes
    pub fn band(&self) -> RiskBand {
        RiskBand::from_score(self.risk_score)
    }
}

/// Coarse severity band derived from a call risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    /// Score below 30
    Safe,
    /// Score 30..=69
    Caution,
    /// Score 70 and above
    Danger,
}

impl RiskBand {
    /// Band a raw 0-100 score
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => Self::Danger,
            30.. => Self::Caution,
            _ => Self::Safe,
        }
    }
}
