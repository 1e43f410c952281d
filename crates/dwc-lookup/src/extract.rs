//! Converts one raw lookup response into a normalized record or a
//! classified failure.
//!
//! Stateless and pure per item: extraction of different serials can run in
//! any order, and no failure here is ever fatal to the batch.

use dwc_core::WarrantyRecord;

use crate::normalize::{normalize_fields, serial_from_url, PROVIDER_KEY};
use crate::parse::parse_warranty_fields;
use crate::types::{ExtractionFailure, FailureReason, FetchStatus, RawResponse};

/// Extracts a [`WarrantyRecord`] from a raw response.
///
/// # Errors
///
/// - [`FailureReason::NotFound`] — the fetch itself failed; the identifier
///   is the input serial number.
/// - [`FailureReason::Unparseable`] — the page was fetched but has no
///   warranty block, or its blocks yield no `Provider` field; the
///   identifier is derived from the resolved URL.
pub fn extract_record(response: RawResponse) -> Result<WarrantyRecord, ExtractionFailure> {
    let (final_url, body) = match response.status {
        FetchStatus::Failed(cause) => {
            tracing::debug!(
                serial = %response.request.serial_number,
                error = %cause,
                "fetch failed; classifying as not found"
            );
            return Err(ExtractionFailure {
                identifier: response.request.serial_number,
                reason: FailureReason::NotFound,
            });
        }
        FetchStatus::Fetched { final_url, body } => (final_url, body),
    };

    let identifier = serial_from_url(&final_url).to_owned();
    let Some(fields) = parse_warranty_fields(&body) else {
        return Err(ExtractionFailure {
            identifier,
            reason: FailureReason::Unparseable,
        });
    };

    let record = normalize_fields(fields, &final_url);
    if !record.contains_key(PROVIDER_KEY) {
        return Err(ExtractionFailure {
            identifier,
            reason: FailureReason::Unparseable,
        });
    }
    Ok(record)
}
