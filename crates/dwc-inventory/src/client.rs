//! HTTP client for the Device42 inventory API.
//!
//! Wraps `reqwest` with basic-auth credential handling and typed response
//! deserialization for the single endpoint this tool consumes: the
//! `devices/` listing filtered by customer, used to turn a brand name into
//! a batch of serial numbers.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::InventoryError;
use crate::types::DevicesResponse;

/// Client for the Device42 REST API.
///
/// Manages the HTTP client, credentials, and base URL. Use
/// [`InventoryClient::new`] in production; tests point it at a mock server.
pub struct InventoryClient {
    client: Client,
    base_url: Url,
    username: String,
    password: String,
}

impl InventoryClient {
    /// Creates a new client for the inventory API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`InventoryError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(
        base_url: &str,
        username: &str,
        password: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, InventoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so
        // Url::join treats it as a directory rather than replacing the last
        // path segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalized).map_err(|e| InventoryError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }

    /// Lists the serial numbers of every device recorded for `brand`.
    ///
    /// Calls `GET devices/?customer=<brand>&format=json` and returns the
    /// serials in listing order. Devices with no serial recorded (missing,
    /// `null`, or empty string) are filtered out.
    ///
    /// # Errors
    ///
    /// - [`InventoryError::Http`] on network failure.
    /// - [`InventoryError::UnexpectedStatus`] for any non-2xx response.
    /// - [`InventoryError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn list_serials(&self, brand: &str) -> Result<Vec<String>, InventoryError> {
        let mut url = self
            .base_url
            .join("devices/")
            .map_err(|e| InventoryError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("customer", brand)
            .append_pair("format", "json");

        let response = self
            .client
            .get(url.clone())
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InventoryError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: DevicesResponse =
            serde_json::from_str(&body).map_err(|e| InventoryError::Deserialize {
                context: format!("devices for customer {brand}"),
                source: e,
            })?;

        let total = parsed.devices.len();
        let serials: Vec<String> = parsed
            .devices
            .into_iter()
            .filter_map(|d| d.serial_no)
            .filter(|s| !s.is_empty())
            .collect();
        if serials.len() < total {
            tracing::debug!(
                brand,
                total,
                with_serial = serials.len(),
                "inventory listed devices without serial numbers"
            );
        }

        Ok(serials)
    }
}
