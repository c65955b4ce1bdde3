use serde::Serialize;

use crate::renko::precursor::PrecursorBrick;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BrickSummary {
    pub total: usize,
    pub up: usize,
    pub down: usize,
    pub flips: usize,
    pub longest_run: usize,
    pub total_volume: f64,
    pub high_energy: usize,
}

impl BrickSummary {
    /// Aggregate an annotated run. Non-finite brick volumes are left out of `total_volume`.
    pub fn from_bricks(bricks: &[PrecursorBrick], min_vol_lag: f64, min_squeeze: u32) -> Self {
        let mut summary = Self::default();
        let mut run = 0usize;
        let mut prev_direction = None;

        for b in bricks {
            summary.total += 1;
            if b.brick.is_up() {
                summary.up += 1;
            } else {
                summary.down += 1;
            }
            summary.flips += usize::from(b.flip);
            if b.brick.volume.is_finite() {
                summary.total_volume += b.brick.volume;
            }
            if b.is_high_energy(min_vol_lag, min_squeeze) {
                summary.high_energy += 1;
            }

            run = if prev_direction == Some(b.direction) {
                run + 1
            } else {
                1
            };
            prev_direction = Some(b.direction);
            summary.longest_run = summary.longest_run.max(run);
        }
        summary
    }

    pub fn up_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.up as f64 / self.total as f64
        }
    }
}
