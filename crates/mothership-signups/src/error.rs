//! Gateway error types.
//!
//! Every remote failure is wrapped and propagated to the caller — never
//! swallowed. The one deliberate exception is
//! [`SignupsClient::check_connection`](crate::SignupsClient::check_connection),
//! which trades the error signal for a plain boolean.

/// Errors from Supabase gateway calls.
#[derive(Debug, thiserror::Error)]
pub enum SignupsError {
    /// HTTP transport error (connect, TLS, timeout, body read).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Supabase returned a non-2xx status; carries the remote message verbatim.
    #[error("Supabase {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The configured anon key is not usable as an HTTP header value.
    #[error("Supabase anon key contains characters not allowed in an HTTP header")]
    InvalidKey,
}
