pub mod csv;

pub use self::csv::{load_candles_from_csv, parse_timestamp_ms};
