use super::*;

// ---------------------------------------------------------------------------
// truncate_date
// ---------------------------------------------------------------------------

#[test]
fn truncate_date_cuts_at_time_separator() {
    assert_eq!(truncate_date("2013-10-23T00:00:00-05:00"), "2013-10-23");
}

#[test]
fn truncate_date_leaves_plain_dates_alone() {
    assert_eq!(truncate_date("2013-10-23"), "2013-10-23");
}

#[test]
fn truncate_date_is_idempotent() {
    let once = truncate_date("2013-10-23T00:00:00-05:00");
    assert_eq!(truncate_date(once), once);
}

#[test]
fn truncate_date_empty_string() {
    assert_eq!(truncate_date(""), "");
}

// ---------------------------------------------------------------------------
// title_case
// ---------------------------------------------------------------------------

#[test]
fn title_case_capitalizes_each_word() {
    assert_eq!(title_case("acme corp"), "Acme Corp");
}

#[test]
fn title_case_lowercases_shouting() {
    assert_eq!(title_case("DELL MARKETING LP"), "Dell Marketing Lp");
}

#[test]
fn title_case_handles_punctuation_boundaries() {
    assert_eq!(title_case("acme-west, inc."), "Acme-West, Inc.");
}

#[test]
fn title_case_is_idempotent() {
    let once = title_case("acme corp");
    assert_eq!(title_case(&once), once);
}

// ---------------------------------------------------------------------------
// normalize_provider
// ---------------------------------------------------------------------------

#[test]
fn provider_uny_maps_to_dell_any_case() {
    assert_eq!(normalize_provider("UNY"), "Dell");
    assert_eq!(normalize_provider("uny"), "Dell");
    assert_eq!(normalize_provider("Uny"), "Dell");
}

#[test]
fn provider_other_values_title_cased() {
    assert_eq!(normalize_provider("acme corp"), "Acme Corp");
}

#[test]
fn provider_normalization_is_idempotent() {
    assert_eq!(normalize_provider("Dell"), "Dell");
    assert_eq!(normalize_provider(&normalize_provider("UNY")), "Dell");
}

// ---------------------------------------------------------------------------
// serial_from_url
// ---------------------------------------------------------------------------

#[test]
fn serial_from_url_takes_last_segment() {
    assert_eq!(serial_from_url("https://qrl.dell.com/ABC123"), "ABC123");
}

#[test]
fn serial_from_url_trailing_slash_is_empty() {
    assert_eq!(serial_from_url("https://qrl.dell.com/"), "");
}

#[test]
fn serial_from_url_no_slash_returns_input() {
    assert_eq!(serial_from_url("ABC123"), "ABC123");
}

// ---------------------------------------------------------------------------
// normalize_fields
// ---------------------------------------------------------------------------

fn raw_fields(pairs: &[(&str, &str)]) -> std::collections::BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[test]
fn normalize_fields_truncates_every_date_key() {
    let fields = raw_fields(&[
        ("Ship Date", "2013-10-23T00:00:00-05:00"),
        ("Warranty End Date", "2016-10-23T23:59:59-05:00"),
        ("Provider", "UNY"),
    ]);
    let record = normalize_fields(fields, "https://qrl.dell.com/ABC123");
    assert_eq!(record.get("Ship Date"), Some("2013-10-23"));
    assert_eq!(record.get("Warranty End Date"), Some("2016-10-23"));
}

#[test]
fn normalize_fields_leaves_non_date_keys_untouched() {
    let fields = raw_fields(&[("Provider", "UNY"), ("Service Level", "NBD ProSupport")]);
    let record = normalize_fields(fields, "https://qrl.dell.com/ABC123");
    assert_eq!(record.get("Service Level"), Some("NBD ProSupport"));
}

#[test]
fn normalize_fields_serial_comes_from_resolved_url() {
    // The page itself claims a different serial; the resolved URL wins.
    let fields = raw_fields(&[("Provider", "UNY"), ("Serial Number", "STALE")]);
    let record = normalize_fields(fields, "https://qrl.dell.com/NEW456");
    assert_eq!(record.get("Serial Number"), Some("NEW456"));
}

#[test]
fn normalize_fields_aliases_provider() {
    let fields = raw_fields(&[("Provider", "uny")]);
    let record = normalize_fields(fields, "https://qrl.dell.com/ABC123");
    assert_eq!(record.get("Provider"), Some("Dell"));
}

#[test]
fn normalize_fields_missing_provider_passes_through() {
    // Extraction rejects records without a provider; normalization itself
    // does not invent one.
    let fields = raw_fields(&[("Ship Date", "2013-10-23T00:00:00-05:00")]);
    let record = normalize_fields(fields, "https://qrl.dell.com/ABC123");
    assert!(!record.contains_key("Provider"));
    assert_eq!(record.get("Serial Number"), Some("ABC123"));
}

#[test]
fn normalize_fields_is_idempotent() {
    let fields = raw_fields(&[
        ("Ship Date", "2013-10-23T00:00:00-05:00"),
        ("Provider", "UNY"),
    ]);
    let once = normalize_fields(fields, "https://qrl.dell.com/ABC123");
    let again = normalize_fields(
        once.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect(),
        "https://qrl.dell.com/ABC123",
    );
    assert_eq!(once, again);
}
