pub mod client;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod parse;
pub mod types;

pub use client::{WarrantyClient, DEFAULT_CONCURRENCY};
pub use error::LookupError;
pub use extract::extract_record;
pub use types::{ExtractionFailure, FailureReason, FetchStatus, LookupRequest, RawResponse};
