use serde::{Deserialize, Serialize};

use crate::indicator::rolling::RollingWindow;
use crate::model::Brick;

pub const DEFAULT_VOLUME_WINDOW: usize = 14;
pub const DEFAULT_SQUEEZE_WINDOW: usize = 5;

fn default_volume_window() -> usize {
    DEFAULT_VOLUME_WINDOW
}

fn default_squeeze_window() -> usize {
    DEFAULT_SQUEEZE_WINDOW
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PrecursorConfig {
    /// Bricks averaged into `vol_ma`.
    #[serde(default = "default_volume_window")]
    pub window: usize,
    /// Bricks whose flips are summed into `squeeze_score`.
    #[serde(default = "default_squeeze_window")]
    pub squeeze_window: usize,
}

impl Default for PrecursorConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_VOLUME_WINDOW,
            squeeze_window: DEFAULT_SQUEEZE_WINDOW,
        }
    }
}

impl PrecursorConfig {
    pub fn with_window(window: usize) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }
}

/// A brick annotated with its precursor metrics. `None` marks a value that is
/// undefined for this brick (not enough history, or an undefined input).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrecursorBrick {
    #[serde(flatten)]
    pub brick: Brick,
    pub vol_ma: Option<f64>,
    pub vol_lag: Option<f64>,
    pub direction: i8,
    pub flip: u8,
    pub squeeze_score: Option<u32>,
}

impl PrecursorBrick {
    /// Volume ratio at or above `min_vol_lag` while the trailing window shows
    /// at least `min_squeeze` reversals. Undefined metrics never qualify.
    pub fn is_high_energy(&self, min_vol_lag: f64, min_squeeze: u32) -> bool {
        match (self.vol_lag, self.squeeze_score) {
            (Some(lag), Some(squeeze)) => lag >= min_vol_lag && squeeze >= min_squeeze,
            _ => false,
        }
    }
}

/// Streaming precursor calculator: push bricks in order, get annotated bricks back.
#[derive(Debug, Clone)]
pub struct PrecursorTracker {
    volumes: RollingWindow,
    flips: RollingWindow,
    prev_direction: Option<i8>,
}

impl PrecursorTracker {
    /// Zero-length windows are clamped to one brick.
    pub fn new(config: &PrecursorConfig) -> Self {
        Self {
            volumes: RollingWindow::new(config.window.max(1)),
            flips: RollingWindow::new(config.squeeze_window.max(1)),
            prev_direction: None,
        }
    }

    pub fn push(&mut self, brick: &Brick) -> PrecursorBrick {
        self.volumes.push(brick.volume);
        let vol_ma = self.volumes.mean();
        let vol_lag = match vol_ma {
            Some(ma) if ma != 0.0 && brick.volume.is_finite() => Some(brick.volume / ma),
            _ => None,
        };

        let direction = brick.direction();
        let flip: u8 = match self.prev_direction.replace(direction) {
            Some(prev) if prev != direction => 1,
            _ => 0,
        };
        self.flips.push(f64::from(flip));
        let squeeze_score = self.flips.sum().map(|s| s.round() as u32);

        PrecursorBrick {
            brick: *brick,
            vol_ma,
            vol_lag,
            direction,
            flip,
            squeeze_score,
        }
    }
}

/// Annotate `bricks` using a `window`-brick volume average and the default squeeze window.
pub fn calculate_precursors(bricks: &[Brick], window: usize) -> Vec<PrecursorBrick> {
    calculate_precursors_with(bricks, &PrecursorConfig::with_window(window))
}

pub fn calculate_precursors_with(bricks: &[Brick], config: &PrecursorConfig) -> Vec<PrecursorBrick> {
    let mut tracker = PrecursorTracker::new(config);
    bricks.iter().map(|b| tracker.push(b)).collect()
}
