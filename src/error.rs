//! Error types
//!
//! The simulation itself never fails: generation and spawning recover locally.
//! Only loading and validating configuration can produce an error.

/// Configuration loading/validation error.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for `GameConfig`
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values parsed but are unusable
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
