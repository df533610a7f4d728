use thiserror::Error;

/// Top-level error type for the `firefly3-api` crate.
///
/// Each lifecycle operation performs exactly one request, so every
/// failure maps to one of these variants. `firefly3-core` inspects
/// [`Error::is_not_found`] to drive its state-pruning policy.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout,
    /// cancelled request).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint URL could not be parsed or extended with an API path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// API key contains bytes that cannot appear in an HTTP header.
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    // ── Remote API ──────────────────────────────────────────────────
    /// The remote resource does not exist (HTTP 404).
    #[error("Resource not found")]
    NotFound,

    /// Any other non-2xx response, with the raw body for diagnosis.
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// Request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Serialization(serde_json::Error),

    /// Response envelope could not be decoded, with the raw body.
    ///
    /// On create this means the remote entity exists but the caller
    /// holds no record of it; surfacing the body is the only recovery
    /// aid we offer (retries are out of scope).
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error means the remote entity is gone.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
