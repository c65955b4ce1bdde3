use serde::{Deserialize, Serialize};

use crate::model::tick::Tick;

/// One OHLCV sample. `timestamp_ms` is the candle's open time in unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp_ms: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(timestamp_ms: u64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp_ms,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Flat candle where every price equals `close`.
    pub fn flat(timestamp_ms: u64, close: f64, volume: f64) -> Self {
        Self::new(timestamp_ms, close, close, close, close, volume)
    }
}

/// Aggregates trade ticks into a single candle over a time interval.
#[derive(Debug, Clone)]
pub struct CandleBuilder {
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
    open_time: u64,
    close_time: u64,
}

impl CandleBuilder {
    /// Start a new candle. The bucket is aligned to the interval.
    pub fn new(price: f64, qty: f64, timestamp_ms: u64, interval_ms: u64) -> Self {
        assert!(interval_ms > 0, "interval_ms must be > 0");
        let open_time = timestamp_ms - (timestamp_ms % interval_ms);
        Self {
            open: price,
            high: price,
            low: price,
            close: price,
            volume: qty.max(0.0),
            open_time,
            close_time: open_time + interval_ms,
        }
    }

    pub fn from_tick(tick: &Tick, interval_ms: u64) -> Self {
        Self::new(tick.price, tick.qty, tick.timestamp_ms, interval_ms)
    }

    pub fn update(&mut self, price: f64, qty: f64) {
        self.high = self.high.max(price);
        self.low = self.low.min(price);
        self.close = price;
        self.volume += qty.max(0.0);
    }

    pub fn update_tick(&mut self, tick: &Tick) {
        self.update(tick.price, tick.qty);
    }

    /// Check if a timestamp belongs to this candle's time bucket.
    pub fn contains(&self, timestamp_ms: u64) -> bool {
        timestamp_ms >= self.open_time && timestamp_ms < self.close_time
    }

    pub fn open_time(&self) -> u64 {
        self.open_time
    }

    pub fn close_time(&self) -> u64 {
        self.close_time
    }

    pub fn finish(&self) -> Candle {
        Candle {
            timestamp_ms: self.open_time,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume,
        }
    }
}
