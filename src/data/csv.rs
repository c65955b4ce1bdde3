//! CSV candle loading.

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDateTime};

use crate::model::Candle;

/// Parse a timestamp cell into unix milliseconds.
///
/// Accepts unix seconds, unix milliseconds (13+ digits), RFC 3339, and
/// `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` read as UTC.
pub fn parse_timestamp_ms(s: &str) -> Option<u64> {
    let s = s.trim();
    if let Ok(ts) = s.parse::<f64>() {
        if !ts.is_finite() || ts < 0.0 {
            return None;
        }
        let ms = if ts > 1e12 { ts } else { ts * 1000.0 };
        return Some(ms.round() as u64);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return u64::try_from(dt.timestamp_millis()).ok();
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(|dt| u64::try_from(dt.and_utc().timestamp_millis()).ok())
}

/// Missing or malformed price/volume cells become NaN and flow through as undefined values.
fn parse_value(cell: Option<&str>) -> f64 {
    cell.and_then(|c| c.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Load candles from a CSV file with a header row.
///
/// Columns are matched by (case-insensitive) name: a timestamp column
/// (`timestamp`, `time`, `date`, `datetime` or `open_time`), `close` and
/// `volume` are required; `open`, `high` and `low` fall back to `close`.
/// Row order is preserved; out-of-order timestamps are logged, not reordered.
pub fn load_candles_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Candle>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .iter()
        .map(|h| h.to_ascii_lowercase())
        .collect();
    let column = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let Some(ts_col) = column(&["timestamp", "time", "date", "datetime", "open_time"]) else {
        bail!("{}: no timestamp column", path.display());
    };
    let Some(close_col) = column(&["close"]) else {
        bail!("{}: no close column", path.display());
    };
    let Some(volume_col) = column(&["volume"]) else {
        bail!("{}: no volume column", path.display());
    };
    let open_col = column(&["open"]);
    let high_col = column(&["high"]);
    let low_col = column(&["low"]);

    let mut candles = Vec::new();
    let mut prev_ts = None;
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("{}: bad row {}", path.display(), row + 1))?;

        let raw_ts = record.get(ts_col).unwrap_or("");
        let Some(timestamp_ms) = parse_timestamp_ms(raw_ts) else {
            bail!(
                "{}: row {}: unparseable timestamp '{}'",
                path.display(),
                row + 1,
                raw_ts
            );
        };
        if prev_ts.is_some_and(|p| timestamp_ms < p) {
            tracing::warn!(row = row + 1, timestamp_ms, "Candle timestamps go backwards");
        }
        prev_ts = Some(timestamp_ms);

        let close = parse_value(record.get(close_col));
        let price_or_close = |col: Option<usize>| match col {
            Some(c) => parse_value(record.get(c)),
            None => close,
        };
        candles.push(Candle {
            timestamp_ms,
            open: price_or_close(open_col),
            high: price_or_close(high_col),
            low: price_or_close(low_col),
            close,
            volume: parse_value(record.get(volume_col)),
        });
    }

    tracing::info!(path = %path.display(), count = candles.len(), "Loaded candles from CSV");
    Ok(candles)
}
