//! Integration test: loading discharge files from disk.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use riverflow_io::{IoError, ReaderConfig, TimeSeriesStore};

fn write_file(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(body.as_bytes()).unwrap();
    path
}

#[test]
fn load_turkish_headers_with_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "dsi.csv",
        "\u{feff}İstasyon,Tarih,Akım (m³/s),Enlem,Boylam\n\
         D21A001,01.03.2019,12.4,39.93,32.85\n\
         D21A001,02.03.2019,13.1,39.93,32.85\n",
    );

    let mut store = TimeSeriesStore::new();
    let summary = store.load_csv(&path, &ReaderConfig::default()).unwrap();

    assert_eq!(summary.accepted, 2);
    assert_eq!(store.stations(), ["D21A001"]);
    let first = &store.observations()[0];
    assert_eq!(first.timestamp, NaiveDate::from_ymd_opt(2019, 3, 1).unwrap());
    assert_eq!(first.flow, Some(12.4));
    assert!(store.locations().contains("D21A001"));
}

#[test]
fn semicolon_delimited_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "semi.csv", "Station;Date;Flow\nA;2021-06-01;3.5\n");

    let mut store = TimeSeriesStore::new();
    let cfg = ReaderConfig::default().with_delimiter(b';');
    store.load_csv(&path, &cfg).unwrap();
    assert_eq!(store.observations()[0].flow, Some(3.5));
}

#[test]
fn missing_file_is_reported() {
    let mut store = TimeSeriesStore::new();
    let err = store
        .load_csv(Path::new("/nonexistent/riverflow/input.csv"), &ReaderConfig::default())
        .unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }), "got {err:?}");
}

#[test]
fn load_all_continues_past_failures() {
    let dir = tempfile::tempdir().unwrap();
    let good_a = write_file(dir.path(), "a.csv", "Station,Date,Flow\nA,01.01.2020,1\n");
    let bad = write_file(dir.path(), "bad.csv", "Station,Flow\nB,2\n");
    let good_c = write_file(dir.path(), "c.csv", "Station,Date,Flow\nC,01.01.2020,3\n");
    let missing = dir.path().join("missing.csv");

    let mut store = TimeSeriesStore::new();
    let results = store.load_all(&[&good_a, &bad, &missing, &good_c], &ReaderConfig::default());

    assert_eq!(results.len(), 4);
    assert!(results[0].1.is_ok());
    assert!(matches!(results[1].1, Err(IoError::Validation { .. })));
    assert!(matches!(results[2].1, Err(IoError::FileNotFound { .. })));
    assert!(results[3].1.is_ok());
    assert_eq!(store.stations(), ["A", "C"]);
}

#[test]
fn duplicate_canonical_column_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "dup.csv",
        "Station,İstasyon,Date,Flow\nA,A,01.01.2020,1\n",
    );
    let mut store = TimeSeriesStore::new();
    let err = store.load_csv(&path, &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::Validation { .. }));
    assert!(store.is_empty());
}

#[test]
fn rows_missing_coordinate_tail_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "tail.csv",
        "Station,Date,Flow,Latitude,Longitude\n\
         A,01.01.2020,1,39,32\n\
         B,02.01.2020,3\n",
    );

    let mut store = TimeSeriesStore::new();
    let summary = store.load_csv(&path, &ReaderConfig::default()).unwrap();

    assert_eq!(summary.accepted, 2);
    assert_eq!(store.stations(), ["A", "B"]);
    let b = &store.observations()[1];
    assert_eq!(b.flow, Some(3.0));
    assert_eq!(b.latitude, None);
    assert_eq!(b.longitude, None);
    assert!(store.locations().contains("A"));
    assert!(!store.locations().contains("B"));
}
