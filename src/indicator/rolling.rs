/// Fixed-size trailing window over `f64` samples, backed by a ring buffer.
///
/// `sum` and `mean` are computed from the samples currently in the window, so
/// evicted values never leave rounding residue behind. A non-finite sample
/// inside the window makes both report `None` until it is evicted, the same
/// way a rolling statistic over a column with a missing value is undefined.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    period: usize,
    buffer: Vec<f64>,
    head: usize,
    count: usize,
}

impl RollingWindow {
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "rolling window period must be > 0");
        Self {
            period,
            buffer: vec![0.0; period],
            head: 0,
            count: 0,
        }
    }

    /// Push a new sample, overwriting the oldest once the window is full.
    pub fn push(&mut self, value: f64) {
        self.buffer[self.head] = value;
        self.head = (self.head + 1) % self.period;
        if self.count < self.period {
            self.count += 1;
        }
    }

    pub fn sum(&self) -> Option<f64> {
        if !self.is_ready() {
            return None;
        }
        self.buffer
            .iter()
            .try_fold(0.0, |acc, v| v.is_finite().then(|| acc + v))
    }

    pub fn mean(&self) -> Option<f64> {
        self.sum().map(|s| s / self.period as f64)
    }

    /// True once `period` samples have been pushed.
    pub fn is_ready(&self) -> bool {
        self.count >= self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_after_window_fills() {
        let mut w = RollingWindow::new(3);
        w.push(1.0);
        assert_eq!(w.mean(), None);
        w.push(2.0);
        assert!(!w.is_ready());
        w.push(3.0);
        assert!((w.mean().unwrap() - 2.0).abs() < f64::EPSILON);
        w.push(4.0);
        assert!((w.mean().unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ring_buffer_wraps_correctly() {
        let mut w = RollingWindow::new(3);
        for v in [10.0, 20.0, 30.0, 40.0, 50.0] {
            w.push(v);
        }
        assert!((w.sum().unwrap() - 120.0).abs() < f64::EPSILON);
        w.push(60.0);
        assert!((w.mean().unwrap() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn undefined_sample_blanks_window_until_evicted() {
        let mut w = RollingWindow::new(2);
        w.push(1.0);
        w.push(f64::NAN);
        assert_eq!(w.sum(), None);
        w.push(3.0);
        assert_eq!(w.sum(), None);
        w.push(5.0);
        assert!((w.sum().unwrap() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_drift_after_many_pushes() {
        let mut w = RollingWindow::new(10);
        let mut naive_buf: Vec<f64> = Vec::new();

        for i in 0..10_000u64 {
            let val = (i as f64) * 0.1 + 0.01;
            w.push(val);
            naive_buf.push(val);
            if naive_buf.len() > 10 {
                naive_buf.remove(0);
            }

            if let Some(ring_avg) = w.mean() {
                let naive_avg: f64 = naive_buf.iter().sum::<f64>() / naive_buf.len() as f64;
                assert!(
                    (ring_avg - naive_avg).abs() < 1e-8,
                    "Drift at i={}: ring={} naive={}",
                    i,
                    ring_avg,
                    naive_avg
                );
            }
        }
    }

    #[test]
    fn large_sample_leaves_no_residue_once_evicted() {
        let mut w = RollingWindow::new(2);
        for v in [1e17, 1.0, 1.0, 1.0] {
            w.push(v);
        }
        assert_eq!(w.sum(), Some(2.0));
        assert_eq!(w.mean(), Some(1.0));
    }

    #[test]
    fn zeros_after_fractions_sum_to_exact_zero() {
        let mut w = RollingWindow::new(3);
        for v in [0.1, 0.7, 33.33, 0.0, 0.0, 0.0] {
            w.push(v);
        }
        assert_eq!(w.sum(), Some(0.0));
    }

    #[test]
    #[should_panic(expected = "rolling window period must be > 0")]
    fn zero_period_panics() {
        RollingWindow::new(0);
    }
}
