#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub price: f64,
    pub qty: f64,
    pub timestamp_ms: u64,
}

impl Tick {
    pub fn new(price: f64, qty: f64, timestamp_ms: u64) -> Self {
        Self {
            price,
            qty,
            timestamp_ms,
        }
    }
}
