//! End-to-end: CSV file on disk → price series → sweep.

use std::io::Write;

use channellab_runner::{
    dataset_hash, load_csv, load_price_series, optimize, ColumnSpec, LoadError, RunConfig,
};

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn csv_to_optimum() {
    let file = write_csv(
        "Date,Close\n\
         2024-01-01,10\n\
         2024-01-02,11\n\
         2024-01-03 00:00:00,12\n\
         01/04/2024,9\n\
         2024-01-05T00:00:00,13\n\
         2024-01-06,8\n\
         2024-01-07,14\n",
    );
    let series = load_price_series(file.path(), &ColumnSpec::default()).unwrap();
    assert_eq!(series.len(), 7);
    assert_eq!(series.timestamps().unwrap().len(), 7);

    let best = optimize(&series, 7).unwrap();
    assert_eq!(best.window, Some(1));
}

#[test]
fn missing_close_column_fails_before_computation() {
    let file = write_csv("Date,Open\n2024-01-01,10\n");
    let err = load_price_series(file.path(), &ColumnSpec::default()).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn { .. }));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_csv(std::path::Path::new("/nonexistent/prices.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn columns_from_config_file() {
    let csv = write_csv("ts,px\n2024-01-01,1.5\n2024-01-02,1.6\n");
    let toml = write_csv(&format!(
        "[data]\npath = {:?}\nclose_column = \"px\"\ndate_column = \"ts\"\n",
        csv.path().display().to_string()
    ));

    let cfg = RunConfig::from_file(toml.path()).unwrap();
    let path = cfg.data.path.clone().unwrap();
    let series = load_price_series(&path, &cfg.data.columns()).unwrap();
    assert_eq!(series.closes(), &[1.5, 1.6]);
    assert!(series.timestamps().is_some());
}

#[test]
fn same_file_same_hash() {
    let file = write_csv("Close\n1\n2\n3\n");
    let a = load_price_series(file.path(), &ColumnSpec::default()).unwrap();
    let b = load_price_series(file.path(), &ColumnSpec::default()).unwrap();
    assert_eq!(dataset_hash(&a), dataset_hash(&b));
}
