use crate::indicator::ema::Ema;
use crate::indicator::stdev::RollingStdDev;
use crate::util::{BUSINESS_DAYS_IN_YEAR, ROOT_BDAYS_IN_YEAR};

/// How many business days of returns feed the slow volatility path.
const SLOW_VOL_YEARS: usize = 20;

/// Weight of the slow path in the blended daily volatility.
const PROPORTION_OF_SLOW_VOL: f64 = 0.3;

/// Blended fast/slow estimator of annualized return volatility for one
/// instrument.
///
/// Fast path: rolling stdev of daily percentage returns over `fast_window`
/// observations, smoothed with an EMA of the same span. Slow path: the same
/// construction over twenty years of business days. Both smoothers start
/// from the first stdev sample, so the slow path contributes long before its
/// window fills. Updates must arrive in timestamp order.
#[derive(Debug, Clone)]
pub struct VolatilityEstimator {
    fast_stdev: RollingStdDev,
    fast_smooth: Ema,
    slow_stdev: RollingStdDev,
    slow_smooth: Ema,
    fast_window: usize,
    samples: usize,
}

impl VolatilityEstimator {
    pub fn new(fast_window: usize) -> Self {
        let slow_window = SLOW_VOL_YEARS * BUSINESS_DAYS_IN_YEAR as usize;
        Self {
            fast_stdev: RollingStdDev::new(fast_window),
            fast_smooth: Ema::smoothing(fast_window),
            slow_stdev: RollingStdDev::new(slow_window),
            slow_smooth: Ema::smoothing(slow_window),
            fast_window,
            samples: 0,
        }
    }

    /// Append one daily percentage return.
    pub fn update(&mut self, return_pct: f64) {
        self.samples += 1;
        if let Some(sd) = self.fast_stdev.push(return_pct) {
            self.fast_smooth.push(sd);
        }
        if let Some(sd) = self.slow_stdev.push(return_pct) {
            self.slow_smooth.push(sd);
        }
    }

    /// Warmed up once the fast window has seen a full complement of returns.
    pub fn is_ready(&self) -> bool {
        self.samples >= self.fast_window
    }

    /// Smoothed fast-path daily volatility.
    pub fn fast_daily(&self) -> Option<f64> {
        self.fast_smooth.value()
    }

    /// Smoothed slow-path daily volatility.
    pub fn slow_daily(&self) -> Option<f64> {
        self.slow_smooth.value()
    }

    /// Annualized blended volatility, `None` until warmed up.
    pub fn estimate(&self) -> Option<f64> {
        if !self.is_ready() {
            return None;
        }
        let fast = self.fast_smooth.value()?;
        let slow = self.slow_smooth.value()?;
        let daily = slow * PROPORTION_OF_SLOW_VOL + fast * (1.0 - PROPORTION_OF_SLOW_VOL);
        Some(daily * ROOT_BDAYS_IN_YEAR)
    }

    pub fn samples(&self) -> usize {
        self.samples
    }
}
