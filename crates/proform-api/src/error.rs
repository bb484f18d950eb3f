use thiserror::Error;

/// Errors returned by the company profile backend client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured backend base URL could not be parsed.
    #[error("invalid backend base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// The backend answered with a non-2xx status, optionally carrying a
    /// server-supplied `{"message": ...}` body.
    #[error("backend returned HTTP {status}: {}", message.as_deref().unwrap_or("no error message"))]
    Rejected { status: u16, message: Option<String> },
}
