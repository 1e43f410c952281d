//! Device42 API response types.
//!
//! Models the subset of the `GET /devices/` JSON response this tool
//! consumes. The API returns far more per-device metadata; unknown fields
//! are ignored.

use serde::Deserialize;

/// Top-level envelope for the `devices/` listing: `{ "Devices": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct DevicesResponse {
    #[serde(rename = "Devices")]
    pub devices: Vec<DeviceEntry>,
}

/// One device row from the inventory listing.
#[derive(Debug, Deserialize)]
pub struct DeviceEntry {
    /// Vendor serial number. `null` or empty for devices the inventory has
    /// no serial recorded for; those are filtered out of lookup batches.
    #[serde(default)]
    pub serial_no: Option<String>,

    /// Inventory display name, used only for diagnostics.
    #[serde(default)]
    pub name: Option<String>,
}
