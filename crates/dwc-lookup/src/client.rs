use std::time::Duration;

use futures::stream::{self, Stream, StreamExt};
use reqwest::Client;

use crate::error::LookupError;
use crate::types::{FetchStatus, LookupRequest, RawResponse};

/// Concurrency ceiling applied when the caller passes `0`.
pub const DEFAULT_CONCURRENCY: usize = 100;

/// HTTP client for the vendor's public warranty lookup endpoint.
///
/// Issues one GET per serial number, bounded to a caller-specified number of
/// requests in flight, and yields raw responses in completion order. Failures
/// are carried inline as [`FetchStatus::Failed`] so one serial's error never
/// interrupts the rest of the batch. No retries: a failed attempt is terminal
/// for that serial.
pub struct WarrantyClient {
    client: Client,
    /// Normalized to end with exactly one `/`; serials append directly.
    base_url: String,
    credentials: Option<(String, String)>,
}

impl WarrantyClient {
    /// Creates a `WarrantyClient` with configured timeout and `User-Agent`.
    ///
    /// `accept_invalid_certs` disables TLS certificate verification for the
    /// vendor endpoint. It is threaded through from configuration rather than
    /// hardcoded so the setting stays visible and reviewable.
    ///
    /// `credentials` is an optional `(username, password)` pair sent as
    /// basic auth on every lookup request.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LookupError::InvalidBaseUrl`] if
    /// `base_url` does not parse as a URL.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        accept_invalid_certs: bool,
        credentials: Option<(String, String)>,
    ) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;
        let base_url = normalize_base_url(base_url)?;
        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    /// Streams raw lookup responses for `serials` with at most `limit`
    /// requests in flight at any instant.
    ///
    /// As soon as one request completes another is started, until every
    /// serial has been dispatched. Items arrive in completion order, NOT
    /// input order — consumers must not assume ordering. A `limit` of `0`
    /// falls back to [`DEFAULT_CONCURRENCY`].
    pub fn lookup_stream<'a>(
        &'a self,
        serials: &'a [String],
        limit: usize,
    ) -> impl Stream<Item = RawResponse> + 'a {
        let limit = if limit == 0 { DEFAULT_CONCURRENCY } else { limit };
        stream::iter(serials.iter().map(String::as_str))
            .map(move |serial| self.fetch_serial(serial))
            .buffer_unordered(limit)
    }

    /// Performs a single warranty lookup for `serial`.
    ///
    /// Transport errors and undecodable bodies both classify the response as
    /// [`FetchStatus::Failed`] rather than propagating; the HTTP status code
    /// is not itself checked — an unknown serial surfaces as a page without
    /// a warranty block, which extraction classifies downstream.
    pub async fn fetch_serial(&self, serial: &str) -> RawResponse {
        let url = self.lookup_url(serial);
        let request = LookupRequest {
            serial_number: serial.to_owned(),
            url: url.clone(),
        };
        let status = match self.get_body(&url).await {
            Ok((final_url, body)) => FetchStatus::Fetched { final_url, body },
            Err(e) => {
                tracing::debug!(serial, error = %e, "warranty lookup request failed");
                FetchStatus::Failed(e)
            }
        };
        RawResponse { request, status }
    }

    async fn get_body(&self, url: &str) -> Result<(String, String), LookupError> {
        let mut request = self.client.get(url);
        if let Some((username, password)) = &self.credentials {
            request = request.basic_auth(username, Some(password));
        }
        let response = request.send().await?;
        // Capture the URL after redirects before consuming the body; the
        // serial number recorded in the result comes from here.
        let final_url = response.url().to_string();
        let body = response.text().await?;
        Ok((final_url, body))
    }

    fn lookup_url(&self, serial: &str) -> String {
        format!("{}{}", self.base_url, serial)
    }
}

/// Normalizes the base URL to end with exactly one slash so serials append
/// as a path segment, and rejects values that do not parse as URLs.
fn normalize_base_url(base_url: &str) -> Result<String, LookupError> {
    let normalized = format!("{}/", base_url.trim_end_matches('/'));
    reqwest::Url::parse(&normalized).map_err(|e| LookupError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })?;
    Ok(normalized)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
