//! Error types for TruthShield

/// Result type alias using TruthShield's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for TruthShield operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors, including a missing API credential
    #[error("configuration error: {0}")]
    Config(String),

    /// Remote generative API errors (network failure, HTTP status, malformed body)
    #[error("remote classifier error: {0}")]
    Remote(String),

    /// Fallback classifier construction or execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// The remote call did not finish before its deadline
    #[error("remote classification timed out")]
    Timeout,

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new remote error
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Whether this error is a deadline breach
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}
