//! Keyword fallback classifier for pasted messages
//!
//! Maintains two Vietnamese keyword sets: scam indicators (transfer
//! requests, emergency claims, prize claims, credential/OTP requests,
//! bank-account phrasing, SIM-upgrade social engineering, account-lock
//! threats) and urgency markers. Any hit yields `Suspicious`, deliberately
//! biased toward caution: for this audience a missed scam costs far more
//! than an unnecessary warning.

use aho_corasick::AhoCorasick;
use tracing::debug;
use truthshield_core::{Error, MessageAssessment, Result, Verdict};

/// Default scam-indicator keyword set (lowercase)
pub const SCAM_INDICATORS: &[&str] = &[
    "chuyển tiền",
    "cấp cứu",
    "trúng thưởng",
    "mật khẩu",
    "otp",
    "tài khoản ngân hàng",
    "nâng cấp sim",
    "khóa tài khoản",
];

/// Default urgency keyword set (lowercase)
pub const URGENCY_MARKERS: &[&str] = &[
    "gấp",
    "ngay lập tức",
    "trong vòng 24h",
    "khẩn cấp",
];

/// Wording returned when a sensitive keyword is found while offline
pub const OFFLINE_KEYWORD_WORDING: &str =
    "Hệ thống ngoại tuyến: Phát hiện từ khóa nhạy cảm. Vui lòng gọi điện xác minh.";

/// Wording returned when no keyword is found while offline
pub const OFFLINE_CLEAN_WORDING: &str =
    "Không phát hiện từ khóa nguy hiểm (Chế độ Offline).";

/// Keyword-set fallback classifier using Aho-Corasick matching
pub struct KeywordFallback {
    scam: AhoCorasick,
    urgency: AhoCorasick,
}

impl KeywordFallback {
    /// Create a classifier with the default Vietnamese keyword sets
    pub fn new() -> Result<Self> {
        Self::with_patterns(SCAM_INDICATORS, URGENCY_MARKERS)
    }

    /// Create a classifier with custom keyword sets (patterns must be lowercase)
    pub fn with_patterns(scam: &[&str], urgency: &[&str]) -> Result<Self> {
        // ASCII case folding misses Vietnamese diacritics, so the input is
        // Unicode-lowercased before matching instead of using the matcher's
        // built-in case-insensitivity.
        let build = |patterns: &[&str]| {
            AhoCorasick::new(patterns)
                .map_err(|e| Error::classifier(format!("failed to build keyword matcher: {e}")))
        };

        Ok(Self {
            scam: build(scam)?,
            urgency: build(urgency)?,
        })
    }

    /// Classify already-sanitized message text.
    ///
    /// Synchronous, total, deterministic. Any scam-indicator or urgency hit
    /// yields `Suspicious` with the offline verify-by-phone wording;
    /// otherwise `Safe` with the offline no-keywords wording.
    pub fn classify(&self, sanitized_text: &str) -> MessageAssessment {
        let lowered = sanitized_text.to_lowercase();

        if self.scam.is_match(&lowered) || self.urgency.is_match(&lowered) {
            debug!("offline keyword hit, flagging as suspicious");
            MessageAssessment::fallback(Verdict::Suspicious, OFFLINE_KEYWORD_WORDING)
        } else {
            MessageAssessment::fallback(Verdict::Safe, OFFLINE_CLEAN_WORDING)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use truthshield_core::RiskSource;

    #[test]
    fn test_scam_keyword_triggers() {
        let classifier = KeywordFallback::new().unwrap();

        for text in [
            "vui lòng chuyển tiền vào số này",
            "mã OTP của bạn là 123456",
            "bạn đã TRÚNG THƯỞNG 50 triệu",
            "tài khoản ngân hàng của bác bị khóa",
        ] {
            let assessment = classifier.classify(text);
            assert_eq!(assessment.verdict, Verdict::Suspicious, "missed: {text}");
            assert_eq!(assessment.explanation, OFFLINE_KEYWORD_WORDING);
            assert_eq!(assessment.source, RiskSource::Fallback);
        }
    }

    #[test]
    fn test_urgency_keyword_triggers() {
        let classifier = KeywordFallback::new().unwrap();

        let assessment = classifier.classify("làm ngay lập tức trong vòng 24h");
        assert_eq!(assessment.verdict, Verdict::Suspicious);
    }

    #[test]
    fn test_clean_text_is_safe() {
        let classifier = KeywordFallback::new().unwrap();

        let assessment = classifier.classify("Chào mẹ, con về ăn cơm nhé");
        assert_eq!(assessment.verdict, Verdict::Safe);
        assert_eq!(assessment.explanation, OFFLINE_CLEAN_WORDING);
        assert_eq!(assessment.source, RiskSource::Fallback);
    }

    #[test]
    fn test_case_insensitive_with_diacritics() {
        let classifier = KeywordFallback::new().unwrap();

        let assessment = classifier.classify("CHUYỂN TIỀN GẤP");
        assert_eq!(assessment.verdict, Verdict::Suspicious);
    }

    #[test]
    fn test_total_on_edge_inputs() {
        let classifier = KeywordFallback::new().unwrap();

        assert_eq!(classifier.classify("").verdict, Verdict::Safe);
        assert!(!classifier.classify("").explanation.is_empty());

        let long = "an toàn ".repeat(50_000);
        assert_eq!(classifier.classify(&long).verdict, Verdict::Safe);
    }

    #[test]
    fn test_custom_patterns() {
        let classifier = KeywordFallback::with_patterns(&["mã pin"], &[]).unwrap();

        assert_eq!(classifier.classify("đọc mã PIN cho tôi").verdict, Verdict::Suspicious);
        assert_eq!(classifier.classify("mã OTP của bạn").verdict, Verdict::Safe);
    }
}
