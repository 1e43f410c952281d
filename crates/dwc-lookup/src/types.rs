//! Data shapes flowing through the fetch-and-extract pipeline.

use crate::error::LookupError;

/// One warranty lookup, keyed by serial number.
///
/// Constructed once per input serial; `url` is the base endpoint with the
/// serial appended. Requests are issued in input order but complete in
/// whatever order the endpoint answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub serial_number: String,
    pub url: String,
}

/// Raw outcome of one lookup request.
///
/// Produced exactly once per [`LookupRequest`] and consumed immediately by
/// extraction; not retained afterwards.
#[derive(Debug)]
pub struct RawResponse {
    pub request: LookupRequest,
    pub status: FetchStatus,
}

#[derive(Debug)]
pub enum FetchStatus {
    /// The endpoint answered and the body decoded as text. `final_url` is
    /// the URL after any redirects — the serial number recorded downstream
    /// is derived from it, not from the input string.
    Fetched { final_url: String, body: String },
    /// Transport error or undecodable body. Terminal for this serial.
    Failed(LookupError),
}

/// A per-item failure surfaced to the caller's reporting channel.
///
/// Never stored in the result set; one failure is reported per skipped
/// serial and the batch continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    /// The serial number for fetch failures, or the trailing segment of the
    /// resolved URL for parse failures.
    pub identifier: String,
    pub reason: FailureReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The lookup request itself failed; there was no page to parse.
    NotFound,
    /// The page was fetched but carried no usable warranty block.
    Unparseable,
}

impl std::fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            FailureReason::NotFound => write!(f, "device {} not found", self.identifier),
            FailureReason::Unparseable => {
                write!(f, "no warranty information found for {}", self.identifier)
            }
        }
    }
}
