use crate::error::RenkoError;
use crate::model::{Brick, BrickType, Candle};

/// Largest grid index whose price is an exact `f64` integer multiple (2^53).
const MAX_GRID_INDEX: f64 = 9_007_199_254_740_992.0;

/// Incremental Renko brick builder.
///
/// Brick boundaries live on a fixed grid of `brick_size` multiples. The grid
/// position is kept as an integer index so repeated bricks never accumulate
/// floating point drift; prices are always `index * brick_size`.
///
/// A chart owns its state exclusively. Use one instance per candle stream.
#[derive(Debug, Clone)]
pub struct RenkoChart {
    brick_size: f64,
    last_brick_index: Option<i64>,
    cumulative_volume: f64,
    bricks: Vec<Brick>,
}

impl RenkoChart {
    pub fn new(brick_size: f64) -> Result<Self, RenkoError> {
        if !(brick_size.is_finite() && brick_size > 0.0) {
            return Err(RenkoError::InvalidConfiguration(format!(
                "brick_size must be a positive finite number, got {brick_size}"
            )));
        }
        Ok(Self {
            brick_size,
            last_brick_index: None,
            cumulative_volume: 0.0,
            bricks: Vec::new(),
        })
    }

    /// Build bricks from a full candle history.
    ///
    /// Any previous state is discarded: the grid is re-anchored on the first
    /// candle's close floored to a `brick_size` multiple, then every candle
    /// (the first included) is folded in. Returns the whole brick history.
    pub fn process_data(&mut self, candles: &[Candle]) -> Result<&[Brick], RenkoError> {
        let first = candles.first().ok_or(RenkoError::EmptyInput)?;
        if !first.close.is_finite() {
            return Err(RenkoError::NonFiniteOrigin(first.close));
        }

        let origin = (first.close / self.brick_size).floor();
        if origin.abs() > MAX_GRID_INDEX {
            return Err(RenkoError::InvalidConfiguration(format!(
                "brick_size {} is too small for close {}: grid index {origin:e} out of range",
                self.brick_size, first.close
            )));
        }

        self.bricks.clear();
        self.cumulative_volume = 0.0;
        self.last_brick_index = Some(origin as i64);

        for candle in candles {
            self.push_candle(candle);
        }

        tracing::info!(
            candles = candles.len(),
            bricks = self.bricks.len(),
            brick_size = self.brick_size,
            "Renko batch processed"
        );
        Ok(&self.bricks)
    }

    /// Fold more candles into an initialized chart. Returns only the bricks
    /// formed by this call; they are also appended to [`RenkoChart::bricks`].
    pub fn process_incremental(&mut self, candles: &[Candle]) -> Result<&[Brick], RenkoError> {
        if self.last_brick_index.is_none() {
            return Err(RenkoError::NotInitialized);
        }
        let start = self.bricks.len();
        for candle in candles {
            self.push_candle(candle);
        }
        Ok(&self.bricks[start..])
    }

    fn push_candle(&mut self, candle: &Candle) {
        let Some(mut index) = self.last_brick_index else {
            return;
        };
        self.cumulative_volume += candle.volume;

        let last_price = index as f64 * self.brick_size;
        // Floor, not truncation: a -2.2 brick move is three DOWN bricks.
        let n = ((candle.close - last_price) / self.brick_size).floor();
        if !n.is_finite() {
            tracing::debug!(
                timestamp_ms = candle.timestamp_ms,
                close = candle.close,
                "Skipping candle with non-finite close"
            );
            return;
        }
        if n == 0.0 {
            return;
        }
        if (index as f64 + n).abs() > MAX_GRID_INDEX {
            tracing::warn!(
                timestamp_ms = candle.timestamp_ms,
                close = candle.close,
                brick_size = self.brick_size,
                "Skipping candle whose move leaves the brick grid range"
            );
            return;
        }

        let steps = n.abs() as i64;
        let (brick_type, step) = if n > 0.0 {
            (BrickType::Up, 1)
        } else {
            (BrickType::Down, -1)
        };
        let volume_share = self.cumulative_volume / steps as f64;

        for _ in 0..steps {
            index += step;
            self.bricks.push(Brick {
                timestamp_ms: candle.timestamp_ms,
                price: index as f64 * self.brick_size,
                brick_type,
                volume: volume_share,
                brick_size: self.brick_size,
            });
        }
        tracing::debug!(
            timestamp_ms = candle.timestamp_ms,
            count = steps,
            direction = brick_type.as_str(),
            price = index as f64 * self.brick_size,
            "Bricks formed"
        );

        self.last_brick_index = Some(index);
        self.cumulative_volume = 0.0;
    }

    pub fn brick_size(&self) -> f64 {
        self.brick_size
    }

    pub fn is_initialized(&self) -> bool {
        self.last_brick_index.is_some()
    }

    /// Most recent committed brick boundary, `None` before initialization.
    pub fn last_brick_price(&self) -> Option<f64> {
        self.last_brick_index
            .map(|index| index as f64 * self.brick_size)
    }

    /// Volume accrued since the last brick boundary.
    pub fn cumulative_volume(&self) -> f64 {
        self.cumulative_volume
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }
}
