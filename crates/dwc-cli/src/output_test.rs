use chrono::TimeZone;

use super::*;

fn record(pairs: &[(&str, &str)]) -> WarrantyRecord {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn sample_records() -> Vec<WarrantyRecord> {
    vec![
        record(&[
            ("Serial Number", "ABC123"),
            ("Provider", "Dell"),
            ("Ship Date", "2013-10-23"),
        ]),
        record(&[
            ("Serial Number", "DEF456"),
            ("Provider", "Dell"),
            ("Warranty End Date", "2016-10-23"),
        ]),
    ]
}

// ---------------------------------------------------------------------------
// route_destination
// ---------------------------------------------------------------------------

#[test]
fn json_extension_selects_json() {
    let (path, format) = route_destination(Path::new("out.json"));
    assert_eq!(path, PathBuf::from("out.json"));
    assert_eq!(format, Format::Json);
}

#[test]
fn jsn_extension_selects_json() {
    let (_, format) = route_destination(Path::new("out.jsn"));
    assert_eq!(format, Format::Json);
}

#[test]
fn json_extension_is_case_insensitive() {
    let (_, format) = route_destination(Path::new("out.JSON"));
    assert_eq!(format, Format::Json);
}

#[test]
fn csv_extension_selects_csv() {
    let (path, format) = route_destination(Path::new("out.csv"));
    assert_eq!(path, PathBuf::from("out.csv"));
    assert_eq!(format, Format::Csv);
}

#[test]
fn unknown_extension_appends_csv() {
    let (path, format) = route_destination(Path::new("out.txt"));
    assert_eq!(path, PathBuf::from("out.txt.csv"));
    assert_eq!(format, Format::Csv);
}

#[test]
fn missing_extension_appends_csv() {
    let (path, format) = route_destination(Path::new("results"));
    assert_eq!(path, PathBuf::from("results.csv"));
    assert_eq!(format, Format::Csv);
}

// ---------------------------------------------------------------------------
// fallback_path
// ---------------------------------------------------------------------------

#[test]
fn fallback_name_carries_timestamp() {
    let now = Local.with_ymd_and_hms(2016, 10, 23, 14, 30, 5).unwrap();
    let fallback = fallback_path(Path::new("/tmp/out.csv"), &now);
    assert_eq!(
        fallback,
        PathBuf::from("/tmp/Dell-Warranty-Status-2016-10-23_14:30:05.csv")
    );
}

#[test]
fn fallback_for_bare_name_stays_relative() {
    let now = Local.with_ymd_and_hms(2016, 10, 23, 14, 30, 5).unwrap();
    let fallback = fallback_path(Path::new("out.csv"), &now);
    assert_eq!(
        fallback,
        PathBuf::from("Dell-Warranty-Status-2016-10-23_14:30:05.csv")
    );
}

// ---------------------------------------------------------------------------
// file writers
// ---------------------------------------------------------------------------

#[test]
fn csv_header_is_union_of_keys_and_missing_fields_are_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    write_records(Some(&path), &sample_records()).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_owned)
        .collect();
    assert_eq!(
        headers,
        vec!["Provider", "Serial Number", "Ship Date", "Warranty End Date"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);
    // First record has no "Warranty End Date"; second has no "Ship Date".
    assert_eq!(&rows[0][3], "");
    assert_eq!(&rows[1][2], "");
    assert_eq!(&rows[0][1], "ABC123");
    assert_eq!(&rows[1][1], "DEF456");
}

#[test]
fn json_output_is_an_array_of_record_objects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");

    write_records(Some(&path), &sample_records()).unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<WarrantyRecord> = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].get("Serial Number"), Some("ABC123"));
}

#[test]
fn existing_destination_is_left_untouched_and_fallback_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    std::fs::write(&path, "original contents\n").unwrap();

    write_records(Some(&path), &sample_records()).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "original contents\n",
        "existing file must not be overwritten"
    );

    let fallback = std::fs::read_dir(dir.path())
        .unwrap()
        .map(Result::unwrap)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .find(|name| name.starts_with("Dell-Warranty-Status-") && name.ends_with(".csv"))
        .expect("expected a timestamped fallback file");

    let mut reader = csv::Reader::from_path(dir.path().join(fallback)).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2, "fallback should contain the same records");
}

#[test]
fn collision_on_routed_path_also_falls_back() {
    // Requesting "out" routes to "out.csv"; if that exists the write must
    // still avoid overwriting it.
    let dir = tempfile::tempdir().unwrap();
    let routed = dir.path().join("out.csv");
    std::fs::write(&routed, "original contents\n").unwrap();

    write_records(Some(&dir.path().join("out")), &sample_records()).unwrap();

    assert_eq!(std::fs::read_to_string(&routed).unwrap(), "original contents\n");
}

#[test]
fn stdout_mode_succeeds_without_output_file() {
    write_records(None, &sample_records()).unwrap();
}

#[test]
fn empty_result_set_writes_header_only_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    write_records(Some(&path), &[]).unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    assert!(body.trim().is_empty(), "no headers exist for an empty batch");
}
