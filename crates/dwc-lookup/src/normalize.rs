//! Field normalization rules for extracted warranty fields.
//!
//! All rules are idempotent: running them over an already-normalized record
//! changes nothing.

use std::collections::BTreeMap;

use dwc_core::WarrantyRecord;

pub const SERIAL_NUMBER_KEY: &str = "Serial Number";
pub const PROVIDER_KEY: &str = "Provider";

/// Vendor code the warranty page reports for Dell-underwritten coverage.
const DELL_VENDOR_CODE: &str = "uny";
const DELL_BRAND_NAME: &str = "Dell";

/// Applies the full normalization pass to raw parsed fields.
///
/// Date-keyed values are truncated to calendar-date precision, the serial
/// number is taken from the resolved URL (so redirected lookups record the
/// serial the vendor answered for), and the provider string is canonicalized.
#[must_use]
pub fn normalize_fields(fields: BTreeMap<String, String>, final_url: &str) -> WarrantyRecord {
    let mut record: WarrantyRecord = fields
        .into_iter()
        .map(|(key, value)| {
            let value = if key.contains("Date") {
                truncate_date(&value).to_owned()
            } else {
                value
            };
            (key, value)
        })
        .collect();

    record.insert(SERIAL_NUMBER_KEY, serial_from_url(final_url));
    if let Some(provider) = record.get(PROVIDER_KEY).map(str::to_owned) {
        record.insert(PROVIDER_KEY, normalize_provider(&provider));
    }
    record
}

/// Truncates an ISO 8601 date-time at the `'T'` separator, keeping only the
/// date portion. Values without a `'T'` pass through unchanged.
#[must_use]
pub fn truncate_date(value: &str) -> &str {
    match value.find('T') {
        Some(idx) => &value[..idx],
        None => value,
    }
}

/// Canonicalizes the provider string: the vendor code maps to the brand
/// name, anything else is title-cased.
#[must_use]
pub fn normalize_provider(provider: &str) -> String {
    if provider.eq_ignore_ascii_case(DELL_VENDOR_CODE) {
        DELL_BRAND_NAME.to_owned()
    } else {
        title_case(provider)
    }
}

/// Substring of `url` after the last `/`, or the whole string when no slash
/// is present.
#[must_use]
pub fn serial_from_url(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[idx + 1..],
        None => url,
    }
}

/// Title-cases a string: every letter that follows a non-letter is
/// uppercased, every other letter lowercased. Non-letters pass through.
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
