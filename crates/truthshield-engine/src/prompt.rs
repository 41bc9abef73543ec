//! Prompt construction for the remote classifier
//!
//! Caller-supplied text is embedded inside `<user_content>` tags so the
//! model treats it as material to analyze, not as instructions. The
//! sanitizer has already stripped angle-bracket markup from the text, so
//! the content cannot close the boundary tag early.

use truthshield_core::{sanitize, CallDirection, CallRecord};

/// Opening delimiter for untrusted content
pub const CONTENT_OPEN: &str = "<user_content>";
/// Closing delimiter for untrusted content
pub const CONTENT_CLOSE: &str = "</user_content>";

/// Build the scam-detection prompt for a sanitized message.
///
/// Demands the fixed `"CLASSIFICATION | explanation"` response grammar
/// that [`crate::parse::parse_message_response`] expects.
pub fn message_prompt(sanitized_text: &str) -> String {
    format!(
        "System: You are a cybersecurity expert analyzing Vietnamese text messages for scams.\n\
         Task: Analyze the content inside {CONTENT_OPEN} tags. Keep explanation under 20 words.\n\
         \n\
         Classify as:\n\
         - SCAM: Clear signs of fraud.\n\
         - SUSPICIOUS: Unusual requests, urgency.\n\
         - SAFE: Normal conversation.\n\
         \n\
         Output Format: \"CLASSIFICATION | Short explanation in Vietnamese for an elderly person\"\n\
         \n\
         {CONTENT_OPEN}\n\
         {sanitized_text}\n\
         {CONTENT_CLOSE}\n"
    )
}

/// Build the call-scoring prompt for a call record.
///
/// Embeds the four call attributes and the heuristic rubric the model
/// should weight, and demands the `"score 0-100 | explanation"` grammar.
/// The free-text fields of the record are sanitized here before embedding.
pub fn call_prompt(record: &CallRecord) -> String {
    let contact = match record.contact_name.as_deref() {
        Some(name) if !name.trim().is_empty() => sanitize(name),
        _ => "không có trong danh bạ".to_string(),
    };
    let direction = match record.direction {
        CallDirection::Incoming => "incoming",
        CallDirection::Outgoing => "outgoing",
    };

    format!(
        "System: You are a fraud analyst scoring phone calls made to elderly Vietnamese users.\n\
         \n\
         Call details:\n\
         - Number: {number}\n\
         - Contact: {contact}\n\
         - Duration: {duration} seconds\n\
         - Direction: {direction}\n\
         \n\
         Scoring rubric:\n\
         - Known contact: very low risk (0-10).\n\
         - Unknown number, very short call (under 10s): high risk (60-80), ping/spam pattern.\n\
         - Unknown number, very long call (300s or more): moderate-high risk (40-60), sustained social engineering.\n\
         - Unknown number, medium duration: moderate risk (30-50).\n\
         \n\
         Output Format: \"<score 0-100> | Short explanation in Vietnamese for an elderly person\"\n",
        number = sanitize(&record.phone_number),
        duration = record.duration_secs,
    )
}
