//! TruthShield Engine
//!
//! The hybrid risk-classification engine. Each assessment runs through one
//! pipeline: sanitize the input, call the remote generative classifier
//! under a deadline, and on any failure resolve through the deterministic
//! local fallback. The public assess functions are infallible: every call
//! resolves to a fully formed assessment, never an error.
//!
//! The remote seam is the [`TextGenerator`] trait so tests can inject a
//! scripted client; [`GeminiClient`] is the production implementation.

pub mod client;
pub mod engine;
pub mod parse;
pub mod prompt;

pub use client::{GeminiClient, TextGenerator};
pub use engine::{
    EngineConfig, RiskEngine, CALL_TIMEOUT_WORDING, MESSAGE_TIMEOUT_WORDING,
};
pub use parse::{parse_call_response, parse_message_response, DEFAULT_CAUTION_WORDING};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::{GeminiClient, TextGenerator};
    pub use crate::engine::{EngineConfig, RiskEngine};
    pub use truthshield_core::prelude::*;
}
