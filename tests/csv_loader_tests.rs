use std::io::Write;

use renko_lab::data::load_candles_from_csv;
use renko_lab::renko::RenkoChart;

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_binance_style_export() {
    let file = write_csv(
        "timestamp,open,high,low,close,volume\n\
         2024-01-01 00:00:00,42000.0,42100.0,41950.0,42050.5,12.5\n\
         2024-01-01 00:01:00,42050.5,42200.0,42040.0,42180.0,8.25\n",
    );
    let candles = load_candles_from_csv(file.path()).unwrap();
    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].timestamp_ms, 1_704_067_200_000);
    assert_eq!(candles[1].timestamp_ms - candles[0].timestamp_ms, 60_000);
    assert!((candles[0].close - 42_050.5).abs() < f64::EPSILON);
    assert!((candles[1].volume - 8.25).abs() < f64::EPSILON);
    assert!((candles[1].high - 42_200.0).abs() < f64::EPSILON);
}

#[test]
fn header_matching_is_case_insensitive_and_ohl_optional() {
    let file = write_csv("Time,Close,Volume\n1700000000000,100,1\n1700000060000,111,2\n");
    let candles = load_candles_from_csv(file.path()).unwrap();
    assert_eq!(candles.len(), 2);
    assert!((candles[1].open - 111.0).abs() < f64::EPSILON);
    assert!((candles[1].low - 111.0).abs() < f64::EPSILON);

    let mut chart = RenkoChart::new(5.0).unwrap();
    let bricks = chart.process_data(&candles).unwrap();
    assert_eq!(bricks.len(), 2);
    assert!((bricks[0].volume - 1.5).abs() < f64::EPSILON);
}

#[test]
fn malformed_volume_becomes_undefined_brick_volume() {
    let file = write_csv("timestamp,close,volume\n1,100,1\n2,106,n/a\n3,112,2\n");
    let candles = load_candles_from_csv(file.path()).unwrap();
    assert!(candles[1].volume.is_nan());

    let mut chart = RenkoChart::new(5.0).unwrap();
    let bricks = chart.process_data(&candles).unwrap();
    assert_eq!(bricks.len(), 2);
    assert!(bricks[0].volume.is_nan());
    assert!((bricks[1].volume - 2.0).abs() < f64::EPSILON);
}

#[test]
fn missing_close_column_is_an_error() {
    let file = write_csv("timestamp,open,volume\n1,100,1\n");
    let err = load_candles_from_csv(file.path()).unwrap_err();
    assert!(err.to_string().contains("close"));
}

#[test]
fn bad_timestamp_reports_row() {
    let file = write_csv("timestamp,close,volume\n1,100,1\nsoon,101,1\n");
    let err = load_candles_from_csv(file.path()).unwrap_err();
    assert!(err.to_string().contains("row 2"));
}

#[test]
fn missing_file_is_an_error() {
    assert!(load_candles_from_csv("does/not/exist.csv").is_err());
}
