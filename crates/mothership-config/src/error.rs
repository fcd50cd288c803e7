//! Configuration error types.
//!
//! Raised at startup only. Every variant is fatal to initialization: the
//! caller is expected to abort rather than run with a partial configuration.

/// Errors from configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("{0} environment variable is required")]
    MissingValue(&'static str),
    /// A value is present but does not parse as a well-formed URL.
    #[error("invalid URL in {name}: {reason}")]
    InvalidFormat { name: &'static str, reason: String },
    /// A credential is present but too short to be a real key.
    #[error("{name} appears to be invalid (length {len}, minimum {min})")]
    TooShort {
        name: &'static str,
        len: usize,
        min: usize,
    },
}
