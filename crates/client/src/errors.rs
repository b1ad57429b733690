use thiserror::Error;

/// Unified error type for the entire finance-tracker-client library.
/// Every public fallible function returns `Result<T, ClientError>`.
#[derive(Debug, Error)]
pub enum ClientError {
    // ── API / Network ───────────────────────────────────────────────
    /// Non-success HTTP status. The message is the response body text
    /// when the server sent one, otherwise an operation-specific fallback.
    #[error("{message}")]
    Api { message: String },

    /// Transport-level failure (no HTTP response at all).
    #[error("Network error: {0}")]
    Network(String),

    // ── Client-side ─────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),

    // ── Durable storage ─────────────────────────────────────────────
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ClientError {
    /// Build an API error from a response body, falling back to an
    /// operation-specific message when the body is empty.
    pub fn api(body: String, fallback: &str) -> Self {
        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            fallback.to_string()
        } else {
            trimmed.to_string()
        };
        ClientError::Api { message }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        ClientError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so a
        // bearer token or user id never ends up in a surfaced message.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        ClientError::Network(sanitized)
    }
}
