use thiserror::Error;

/// Main error type for the ranker
#[derive(Error, Debug)]
pub enum RankerError {
    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration value that could not be parsed
    #[error("Invalid value '{value}' for option '{key}'")]
    InvalidOption { key: String, value: String },

    /// Numeric prefix match encoding outside 0..=2
    #[error("Invalid prefix match encoding: {0}")]
    InvalidPrefixMatch(u8),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, RankerError>;
