//! Input sanitization
//!
//! Every piece of untrusted free text is stripped of angle-bracket markup
//! before it is embedded in an outbound prompt or matched against fallback
//! patterns. This is a minimal defense against markup/script injection, not
//! a full HTML sanitizer.

use regex::Regex;
use std::sync::OnceLock;

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    // The pattern is a literal and always compiles.
    TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"))
}

/// Remove all `<...>` markup sequences from the input.
///
/// Pure, total, and idempotent: `sanitize(sanitize(s)) == sanitize(s)`.
pub fn sanitize(input: &str) -> String {
    tag_pattern().replace_all(input, "").into_owned()
}
