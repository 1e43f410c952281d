use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    /// Network, TLS, timeout, or body-decode failure from the underlying
    /// HTTP client. Terminal for the affected serial — no retries.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
