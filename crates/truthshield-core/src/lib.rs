//! TruthShield Core
//!
//! Core types, error handling, and input sanitization shared across the
//! TruthShield risk-classification components.
//!
//! This crate provides:
//! - Assessment types for message and call risk verdicts
//! - Error types and result handling
//! - The markup-stripping input sanitizer applied to all untrusted text

pub mod error;
pub mod sanitize;
pub mod types;

pub use error::{Error, Result};
pub use sanitize::sanitize;
pub use types::{
    CallAssessment, CallDirection, CallRecord, MessageAssessment, RiskBand, RiskSource, Verdict,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sanitize::sanitize;
    pub use crate::types::{
        CallAssessment, CallDirection, CallRecord, MessageAssessment, RiskBand, RiskSource,
        Verdict,
    };
}
