//! TruthShield Classifiers
//!
//! Deterministic, network-independent fallback classifiers used when the
//! remote generative classifier is unavailable, errors, or times out.
//!
//! Two variants exist:
//! - [`KeywordFallback`] matches Vietnamese scam-indicator and urgency
//!   keyword sets against pasted message text
//! - [`CallHeuristic`] scores call-log entries from an ordered decision
//!   table over caller-known flag and duration
//!
//! Both are pure, synchronous, and total: they always produce a fully
//! formed assessment, never an error, so the orchestration layer can rely
//! on them as the terminal resolution path.

pub mod call;
pub mod keywords;

pub use call::{CallHeuristic, CallHeuristicConfig, OFFLINE_SUFFIX};
pub use keywords::{KeywordFallback, OFFLINE_CLEAN_WORDING, OFFLINE_KEYWORD_WORDING};
