//! Batch orchestration: drive the lookup stream and collect results.

use futures::StreamExt;

use dwc_core::WarrantyRecord;
use dwc_lookup::{extract_record, FailureReason, WarrantyClient};

/// Runs the full batch: streams raw responses under the concurrency limit,
/// extracts each as it completes, and collects the successes.
///
/// Failures are logged and skipped — one serial never interrupts another,
/// and successes collected so far are always kept. Records accumulate in
/// extraction-completion order, not input order.
pub async fn run_lookups(
    client: &WarrantyClient,
    serials: &[String],
    limit: usize,
) -> Vec<WarrantyRecord> {
    let mut records = Vec::new();
    let mut failed = 0usize;

    let mut stream = client.lookup_stream(serials, limit);
    while let Some(response) = stream.next().await {
        match extract_record(response) {
            Ok(record) => {
                tracing::info!(
                    serial = record.get("Serial Number").unwrap_or(""),
                    "found system information"
                );
                records.push(record);
            }
            Err(failure) => {
                failed += 1;
                match failure.reason {
                    FailureReason::NotFound => {
                        tracing::error!(identifier = %failure.identifier, "{failure}");
                    }
                    FailureReason::Unparseable => {
                        tracing::warn!(identifier = %failure.identifier, "{failure}");
                    }
                }
            }
        }
    }

    if failed > 0 {
        tracing::warn!(failed, total = serials.len(), "some lookups failed");
    }
    records
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
