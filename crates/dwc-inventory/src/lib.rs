pub mod client;
pub mod error;
pub mod types;

pub use client::InventoryClient;
pub use error::InventoryError;
pub use types::{DeviceEntry, DevicesResponse};
