//! Response grammar parsing
//!
//! The remote classifier is asked for `"CLASSIFICATION | explanation"`
//! (messages) or `"<score 0-100> | explanation"` (calls). Parsing splits
//! on the first `|` and degrades instead of failing: an unrecognized label
//! becomes `Safe`, an unparseable score becomes 0, and a missing
//! explanation becomes a generic caution. The `|`-delimited grammar is an
//! accepted simplification of the wire contract; a structured format would
//! need the prompts updated to match.

use truthshield_core::{CallAssessment, MessageAssessment, Verdict};

/// Generic explanation used when the model omits one
pub const DEFAULT_CAUTION_WORDING: &str = "Cần cảnh giác.";

/// Parse a message-classification response into an assessment.
///
/// The label is matched case-insensitively by substring containment:
/// SCAM first, then SUSPICIOUS, defaulting to SAFE. Never fails.
pub fn parse_message_response(text: &str) -> MessageAssessment {
    let (label, explanation) = split_first_pipe(text);

    let upper = label.trim().to_uppercase();
    let verdict = if upper.contains("SCAM") {
        Verdict::Scam
    } else if upper.contains("SUSPICIOUS") {
        Verdict::Suspicious
    } else {
        Verdict::Safe
    };

    MessageAssessment::remote(verdict, normalize_explanation(explanation))
}

/// Parse a call-scoring response into an assessment.
///
/// The score is an integer parse clamped into 0..=100, defaulting to 0 on
/// parse failure. Never fails.
pub fn parse_call_response(text: &str) -> CallAssessment {
    let (score_part, explanation) = split_first_pipe(text);

    let score = score_part
        .trim()
        .parse::<i64>()
        .unwrap_or(0)
        .clamp(0, 100) as u8;

    CallAssessment::remote(score, normalize_explanation(explanation))
}

fn split_first_pipe(text: &str) -> (&str, Option<&str>) {
    match text.split_once('|') {
        Some((left, right)) => (left, Some(right)),
        None => (text, None),
    }
}

fn normalize_explanation(explanation: Option<&str>) -> String {
    explanation
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(DEFAULT_CAUTION_WORDING)
        .to_string()
}
